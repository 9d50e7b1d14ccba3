//! Single catalog card: thumbnail, title, badges, CO₂ estimate.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouterContext;
use crate::core::impact::estimate_co2_saved;
use crate::models::{Item, ListingType, Route};
use crate::utils::format::format_co2_badge;

stylance::import_crate_style!(css, "src/components/explore/explore.module.css");

#[component]
pub fn ProductCard(item: Item) -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    let id = item.id.clone();
    let thumbnail = item.thumbnail().map(str::to_string);

    // The badge only shows when the lister declared a weight.
    let co2_badge = item
        .weight_kg
        .and_then(|kg| estimate_co2_saved(item.category, kg).ok())
        .map(format_co2_badge);

    let type_class = match item.listing_type {
        ListingType::Donate => format!("{} {}", css::typeBadge, css::typeBadgeDonate),
        ListingType::Swap => format!("{} {}", css::typeBadge, css::typeBadgeSwap),
    };

    view! {
        <article
            class=css::card
            on:click=move |_| router.navigate(Route::Item { id: id.clone() })
        >
            <div class=css::cardImage>
                {match thumbnail {
                    Some(url) => view! { <img src=url alt=item.title.clone() loading="lazy" /> }.into_any(),
                    None => view! {
                        <span class=css::cardImagePlaceholder><Icon icon=ic::IMAGE /></span>
                    }.into_any(),
                }}
                <span class=type_class>{item.listing_type.label()}</span>
                {co2_badge.map(|badge| view! {
                    <span class=css::co2Badge>
                        <Icon icon=ic::LEAF />
                        {badge}
                    </span>
                })}
            </div>
            <div class=css::cardBody>
                <h3 class=css::cardTitle>{item.title.clone()}</h3>
                <p class=css::cardMeta>
                    {item.condition.map(|c| c.label()).unwrap_or("Condition unknown")}
                    {item.category.map(|c| format!(" · {}", c.label())).unwrap_or_default()}
                </p>
            </div>
        </article>
    }
}
