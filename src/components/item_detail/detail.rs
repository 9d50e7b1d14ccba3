//! Item detail page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::item_detail::gallery::Gallery;
use crate::components::router::RouterContext;
use crate::core::impact::estimate_co2_saved;
use crate::models::{Item, ItemStatus, ListingType, Route};
use crate::utils::format::{format_co2_badge, format_weight};

stylance::import_crate_style!(css, "src/components/item_detail/item_detail.module.css");

#[component]
pub fn ItemDetailPage(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");
    let catalog = ctx.catalog;

    let item = Memo::new(move |_| catalog.item_by_id(&id));

    view! {
        <section class=css::detail>
            <button
                class=css::backButton
                on:click=move |_| router.navigate(Route::Explore { search: None })
            >
                <Icon icon=ic::ARROW_LEFT />
                "Back to Explore"
            </button>

            {move || {
                if catalog.loading.get() {
                    return view! { <p class=css::stateNote>"Loading item..."</p> }.into_any();
                }
                match item.get() {
                    Some(item) => view! { <ItemBody item=item /> }.into_any(),
                    None => view! {
                        <div class=css::stateNote>
                            <h2>"Item not found"</h2>
                            <p>"It may have been completed or removed."</p>
                        </div>
                    }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn ItemBody(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let completed = item.status == ItemStatus::Completed;
    let item_id = item.id.clone();
    let on_complete = move |_: leptos::ev::MouseEvent| {
        ctx.catalog.mark_completed(&item_id);
    };

    let co2_badge = item
        .weight_kg
        .and_then(|kg| estimate_co2_saved(item.category, kg).ok())
        .map(format_co2_badge);

    let type_class = match item.listing_type {
        ListingType::Donate => format!("{} {}", css::typeBadge, css::typeBadgeDonate),
        ListingType::Swap => format!("{} {}", css::typeBadge, css::typeBadgeSwap),
    };

    let owner = item
        .owner_name
        .clone()
        .unwrap_or_else(|| "Campus member".to_string());

    view! {
        <div class=css::layout>
            <Gallery images=item.images.clone() title=item.title.clone() />

            <div class=css::info>
                <div class=css::badgeRow>
                    <span class=type_class>{item.listing_type.label()}</span>
                    {co2_badge.map(|badge| view! {
                        <span class=css::co2Badge>
                            <Icon icon=ic::LEAF />
                            {badge}
                            " saved"
                        </span>
                    })}
                </div>

                <h1 class=css::title>{item.title.clone()}</h1>

                <dl class=css::specs>
                    <dt>"Category"</dt>
                    <dd>{item.category.map(|c| c.label()).unwrap_or("Uncategorized")}</dd>
                    <dt>"Condition"</dt>
                    <dd>{item.condition.map(|c| c.label()).unwrap_or("Unknown")}</dd>
                    <dt>"Weight"</dt>
                    <dd>{format_weight(item.weight_kg)}</dd>
                </dl>

                {(!item.description.is_empty()).then(|| view! {
                    <div class=css::description>
                        <h2>"Description"</h2>
                        <p>{item.description.clone()}</p>
                    </div>
                })}

                <div class=css::ownerCard>
                    <span class=css::ownerAvatar><Icon icon=ic::USER /></span>
                    <div class=css::ownerMeta>
                        <span class=css::ownerName>{owner}</span>
                        <span class=css::ownerRole>"Lister"</span>
                    </div>
                </div>

                {if completed {
                    view! {
                        <p class=css::completedNote>
                            <Icon icon=ic::CHECK />
                            "This exchange is complete. Thanks for keeping it in use!"
                        </p>
                    }.into_any()
                } else {
                    view! {
                        <div class=css::contactRow>
                            <button class=css::contactPrimary>
                                <Icon icon=ic::MAIL />
                                {match item.listing_type {
                                    ListingType::Donate => "Request Item",
                                    ListingType::Swap => "Propose a Swap",
                                }}
                            </button>
                            <button class=css::contactSecondary>
                                <Icon icon=ic::HEART />
                                "Save"
                            </button>
                            <button class=css::contactSecondary on:click=on_complete>
                                <Icon icon=ic::CHECK />
                                "Mark as Received"
                            </button>
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
