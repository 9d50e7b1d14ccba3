//! Impact tracker page: stat cards, eco-score ring, leaderboard,
//! achievements.
//!
//! Totals are derived from the current catalog snapshot; each listed
//! item with a declared weight contributes its estimated CO₂ saving.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::impact::{ImpactSummary, summarize};
use crate::utils::format::{format_co2_stat, format_trees_subtext};

stylance::import_crate_style!(css, "src/components/impact/impact.module.css");

/// CO₂ total at which the eco-score ring reads 100.
const ECO_SCORE_FULL_KG: f64 = 50.0;

#[component]
pub fn ImpactPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let catalog = ctx.catalog;
    let session = ctx.session;

    let summary = Memo::new(move |_| catalog.items.with(|items| summarize(items)));
    let greeting = Signal::derive(move || {
        session.with(|s| format!("Nice work, {}!", s.display_name()))
    });

    view! {
        <section class=css::impact>
            <header class=css::pageHeader>
                <h1>"My Eco Impact"</h1>
                <p>{move || greeting.get()}</p>
            </header>

            <div class=css::statGrid>
                <StatCard
                    icon=ic::LEAF
                    label="CO₂ Saved"
                    value=Signal::derive(move || format_co2_stat(summary.get().total_co2_kg))
                    subtext=Signal::derive(move || {
                        format_trees_subtext(summary.get().trees_equivalent)
                    })
                />
                <StatCard
                    icon=ic::RECYCLE
                    label="Items Reused"
                    value=Signal::derive(move || summary.get().items_counted.to_string())
                    subtext=Signal::derive(|| "Kept out of the landfill".to_string())
                />
                <StatCard
                    icon=ic::SPROUT
                    label="Trees Equivalent"
                    value=Signal::derive(move || summary.get().trees_equivalent.to_string())
                    subtext=Signal::derive(|| "One tree absorbs ~21 kg CO₂ a year".to_string())
                />
            </div>

            <div class=css::columns>
                <EcoScoreRing summary=summary />
                <Leaderboard />
            </div>

            <Achievements summary=summary />
        </section>
    }
}

#[component]
fn StatCard(
    icon: icondata::Icon,
    label: &'static str,
    value: Signal<String>,
    subtext: Signal<String>,
) -> impl IntoView {
    view! {
        <div class=css::statCard>
            <span class=css::statIcon><Icon icon=icon /></span>
            <span class=css::statValue>{move || value.get()}</span>
            <span class=css::statLabel>{label}</span>
            <span class=css::statSubtext>{move || subtext.get()}</span>
        </div>
    }
}

/// Circular progress ring; full at [`ECO_SCORE_FULL_KG`] of CO₂ saved.
#[component]
fn EcoScoreRing(summary: Memo<ImpactSummary>) -> impl IntoView {
    let score = Memo::new(move |_| {
        let ratio = (summary.get().total_co2_kg / ECO_SCORE_FULL_KG).clamp(0.0, 1.0);
        (ratio * 100.0).round() as u32
    });

    // SVG ring: r=52 → circumference ≈ 326.7
    const CIRCUMFERENCE: f64 = 326.7;
    let dash_offset = Memo::new(move |_| {
        CIRCUMFERENCE * (1.0 - f64::from(score.get()) / 100.0)
    });

    view! {
        <div class=css::panel>
            <h2 class=css::panelTitle>"Eco Score"</h2>
            <div class=css::ringWrapper>
                <svg viewBox="0 0 120 120" class=css::ring>
                    <circle cx="60" cy="60" r="52" class=css::ringTrack />
                    <circle
                        cx="60"
                        cy="60"
                        r="52"
                        class=css::ringFill
                        stroke-dasharray=CIRCUMFERENCE.to_string()
                        stroke-dashoffset=move || dash_offset.get().to_string()
                    />
                </svg>
                <span class=css::ringScore>{move || score.get()}</span>
            </div>
            <p class=css::ringCaption>
                "Score grows with every kilogram of CO₂ your swaps keep out of the air."
            </p>
        </div>
    }
}

struct LeaderboardRow {
    name: &'static str,
    co2_kg: f64,
}

const LEADERBOARD: [LeaderboardRow; 5] = [
    LeaderboardRow { name: "Green Hall Crew", co2_kg: 128.4 },
    LeaderboardRow { name: "Sarah K.", co2_kg: 96.0 },
    LeaderboardRow { name: "Team 3 Occ 7", co2_kg: 74.5 },
    LeaderboardRow { name: "Lisa M.", co2_kg: 52.3 },
    LeaderboardRow { name: "Dorm B Swappers", co2_kg: 41.8 },
];

#[component]
fn Leaderboard() -> impl IntoView {
    view! {
        <div class=css::panel>
            <h2 class=css::panelTitle>
                <Icon icon=ic::TROPHY />
                "Campus Leaderboard"
            </h2>
            <ol class=css::leaderList>
                {LEADERBOARD
                    .iter()
                    .map(|row| view! {
                        <li class=css::leaderRow>
                            <span class=css::leaderName>{row.name}</span>
                            <span class=css::leaderValue>{format_co2_stat(row.co2_kg)}</span>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </div>
    }
}

struct Achievement {
    title: &'static str,
    description: &'static str,
    threshold_kg: f64,
}

const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        title: "First Sprout",
        description: "Save your first kilogram of CO₂",
        threshold_kg: 1.0,
    },
    Achievement {
        title: "Circular Dozen",
        description: "Reach 12 kg of CO₂ saved",
        threshold_kg: 12.0,
    },
    Achievement {
        title: "Tree Hugger",
        description: "Save a full tree-year of CO₂ (21 kg)",
        threshold_kg: 21.0,
    },
    Achievement {
        title: "Campus Hero",
        description: "Reach 50 kg of CO₂ saved",
        threshold_kg: 50.0,
    },
];

#[component]
fn Achievements(summary: Memo<ImpactSummary>) -> impl IntoView {
    view! {
        <div class=css::panel>
            <h2 class=css::panelTitle>
                <Icon icon=ic::AWARD />
                "Achievements"
            </h2>
            <div class=css::achievementGrid>
                {ACHIEVEMENTS
                    .iter()
                    .map(|achievement| {
                        let threshold = achievement.threshold_kg;
                        let unlocked = Signal::derive(move || {
                            summary.get().total_co2_kg >= threshold
                        });
                        view! {
                            <div class=move || {
                                if unlocked.get() {
                                    format!("{} {}", css::achievement, css::achievementUnlocked)
                                } else {
                                    css::achievement.to_string()
                                }
                            }>
                                <span class=css::achievementIcon>
                                    {move || if unlocked.get() {
                                        view! { <Icon icon=ic::CHECK /> }.into_any()
                                    } else {
                                        view! { <Icon icon=ic::AWARD /> }.into_any()
                                    }}
                                </span>
                                <span class=css::achievementTitle>{achievement.title}</span>
                                <span class=css::achievementDescription>
                                    {achievement.description}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
