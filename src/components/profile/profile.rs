//! Profile page: user card, personal stats, own listings, badges.
//!
//! Own listings are matched by lister name against the session; with a
//! mock session that is the closest available ownership link.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::explore::ProductCard;
use crate::components::icons as ic;
use crate::components::router::RouterContext;
use crate::core::impact::summarize;
use crate::models::{Item, Route, SessionState};
use crate::utils::format::format_co2_stat;

stylance::import_crate_style!(css, "src/components/profile/profile.module.css");

/// Badge thresholds in items listed.
const BADGES: [(&str, usize); 3] = [
    ("First Listing", 1),
    ("Regular Swapper", 3),
    ("Campus Circulator", 10),
];

fn own_items(items: &[Item], full_name: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.owner_name.as_deref() == Some(full_name))
        .cloned()
        .collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    view! {
        <section class=css::profile>
            {move || match ctx.session.get() {
                SessionState::Guest => view! {
                    <div class=css::guestNote>
                        <span class=css::guestIcon><Icon icon=ic::USER /></span>
                        <h2>"You're browsing as a guest"</h2>
                        <p>"Sign in to see your profile and listings."</p>
                        <button
                            class=css::signInButton
                            on:click=move |_| router.navigate(Route::Login)
                        >
                            "Sign In"
                        </button>
                    </div>
                }.into_any(),
                SessionState::SignedIn { full_name, email } => view! {
                    <ProfileBody full_name=full_name email=email />
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ProfileBody(full_name: String, email: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let catalog = ctx.catalog;

    let owner = StoredValue::new(full_name.clone());
    let listings = Memo::new(move |_| {
        catalog
            .items
            .with(|items| owner.with_value(|name| own_items(items, name)))
    });
    let summary = Memo::new(move |_| listings.with(|items| summarize(items)));
    let listed_count = Memo::new(move |_| listings.with(|items| items.len()));

    view! {
        <div class=css::userCard>
            <span class=css::avatar><Icon icon=ic::USER /></span>
            <div class=css::userMeta>
                <h1 class=css::userName>{full_name}</h1>
                <p class=css::userEmail>{email}</p>
            </div>
            <button class=css::signOutButton on:click=move |_| ctx.sign_out()>
                "Sign Out"
            </button>
        </div>

        <div class=css::statRow>
            <div class=css::stat>
                <span class=css::statValue>{move || listed_count.get()}</span>
                <span class=css::statLabel>"Items Listed"</span>
            </div>
            <div class=css::stat>
                <span class=css::statValue>
                    {move || format_co2_stat(summary.get().total_co2_kg)}
                </span>
                <span class=css::statLabel>"CO₂ Saved"</span>
            </div>
            <div class=css::stat>
                <span class=css::statValue>{move || summary.get().trees_equivalent}</span>
                <span class=css::statLabel>"Trees Equivalent"</span>
            </div>
        </div>

        <div class=css::badgeRow>
            {BADGES
                .iter()
                .map(|&(title, threshold)| {
                    let earned = Signal::derive(move || listed_count.get() >= threshold);
                    view! {
                        <span class=move || {
                            if earned.get() {
                                format!("{} {}", css::badge, css::badgeEarned)
                            } else {
                                css::badge.to_string()
                            }
                        }>
                            <Icon icon=ic::AWARD />
                            {title}
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </div>

        <h2 class=css::sectionTitle>"My Listings"</h2>
        <Show
            when=move || (listed_count.get() > 0)
            fallback=|| view! {
                <p class=css::emptyNote>
                    "Nothing listed yet. Your items will show up here."
                </p>
            }
        >
            <div class=css::grid>
                <For
                    each=move || listings.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <ProductCard item=item /> }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemStatus, ListingType};

    fn item(id: &str, owner: Option<&str>) -> Item {
        Item {
            id: id.to_string(),
            title: "test".to_string(),
            images: Vec::new(),
            listing_type: ListingType::Donate,
            category: None,
            condition: None,
            weight_kg: None,
            status: ItemStatus::Active,
            description: String::new(),
            owner_name: owner.map(str::to_string),
        }
    }

    #[test]
    fn test_own_items_matches_by_name() {
        let items = vec![
            item("1", Some("Sarah")),
            item("2", None),
            item("3", Some("Lisa")),
            item("4", Some("Sarah")),
        ];
        let own = own_items(&items, "Sarah");
        assert_eq!(
            own.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            ["1", "4"]
        );
        // Anonymous listings belong to nobody
        assert!(own_items(&items, "").is_empty());
    }
}
