//! Listing form wired to `core::validate::validate_listing`.
//!
//! Submission is mocked: on success the draft is acknowledged and the
//! form resets. Image upload is represented by a photo counter since
//! object storage is an external collaborator.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::impact::estimate_co2_saved;
use crate::core::validate::{ListingDraft, validate_listing};
use crate::config;
use crate::models::{Category, Condition, ListingType, PickupMethod};
use crate::utils::cache;
use crate::utils::format::format_co2_badge;

stylance::import_crate_style!(css, "src/components/list_item/list_item.module.css");

const MAX_IMAGES: usize = 5;

#[component]
pub fn ListItemPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let listing_type = RwSignal::new(ListingType::Donate);
    let category = RwSignal::new(None::<Category>);
    let condition = RwSignal::new(None::<Condition>);
    let weight = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let pickup_method = RwSignal::new(None::<PickupMethod>);
    let campus_location = RwSignal::new(String::new());
    let image_count = RwSignal::new(0usize);

    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(None::<String>);

    // Live CO₂ preview once category and a parsable weight are in
    let co2_preview = Memo::new(move |_| {
        let kg: f64 = weight.get().trim().parse().ok()?;
        estimate_co2_saved(category.get(), kg).ok().map(format_co2_badge)
    });

    let reset = move || {
        title.set(String::new());
        listing_type.set(ListingType::Donate);
        category.set(None);
        condition.set(None);
        weight.set(String::new());
        description.set(String::new());
        pickup_method.set(None);
        campus_location.set(String::new());
        image_count.set(0);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ListingDraft {
            title: title.get().trim().to_string(),
            condition: condition.get(),
            category: category.get(),
            weight: weight.get(),
            description: description.get().trim().to_string(),
            listing_type: listing_type.get(),
            pickup_method: pickup_method.get(),
            campus_location: campus_location.get().trim().to_string(),
            image_count: image_count.get(),
        };
        match validate_listing(&draft) {
            Ok(weight_kg) => {
                error.set(None);
                // The cached snapshot is stale once a new listing exists
                cache::invalidate(config::cache::ITEMS_KEY);
                let saved = estimate_co2_saved(draft.category, weight_kg)
                    .map(format_co2_badge)
                    .unwrap_or_else(|_| "0.0kg CO₂".to_string());
                submitted.set(Some(format!(
                    "\"{}\" is ready to list — about {} saved when it finds a new home.",
                    draft.title, saved
                )));
                reset();
            }
            Err(err) => {
                submitted.set(None);
                error.set(Some(err.to_string()));
            }
        }
    };

    view! {
        <section class=css::listItem>
            <header class=css::pageHeader>
                <h1>"List an Item"</h1>
                <p>"Donate it or swap it. Either way, it stays in use."</p>
            </header>

            <form class=css::form on:submit=on_submit>
                <div class=css::typeRow>
                    {[ListingType::Donate, ListingType::Swap]
                        .into_iter()
                        .map(|lt| {
                            let selected = Signal::derive(move || listing_type.get() == lt);
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if selected.get() {
                                            format!("{} {}", css::typeOption, css::typeOptionActive)
                                        } else {
                                            css::typeOption.to_string()
                                        }
                                    }
                                    on:click=move |_| listing_type.set(lt)
                                >
                                    {lt.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <label class=css::field>
                    <span>"Title"</span>
                    <input
                        type="text"
                        placeholder="e.g. Java Textbook, 3rd edition"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <div class=css::fieldRow>
                    <label class=css::field>
                        <span>"Category"</span>
                        <select on:change=move |ev| {
                            category.set(Category::from_label(&event_target_value(&ev)));
                        }>
                            <option value="" selected=move || category.get().is_none()>
                                "Select a category"
                            </option>
                            {Category::ALL
                                .into_iter()
                                .map(|c| view! {
                                    <option
                                        value=c.label()
                                        selected=move || category.get() == Some(c)
                                    >
                                        {c.label()}
                                    </option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class=css::field>
                        <span>"Condition"</span>
                        <select on:change=move |ev| {
                            condition.set(Condition::from_label(&event_target_value(&ev)));
                        }>
                            <option value="" selected=move || condition.get().is_none()>
                                "Select a condition"
                            </option>
                            {Condition::ALL
                                .into_iter()
                                .map(|c| view! {
                                    <option
                                        value=c.label()
                                        selected=move || condition.get() == Some(c)
                                    >
                                        {c.label()}
                                    </option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <div class=css::fieldRow>
                    <label class=css::field>
                        <span>"Weight (kg)"</span>
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            placeholder="e.g. 1.2"
                            prop:value=move || weight.get()
                            on:input=move |ev| weight.set(event_target_value(&ev))
                        />
                    </label>

                    <label class=css::field>
                        <span>"Campus location"</span>
                        <input
                            type="text"
                            placeholder="e.g. Library lobby"
                            prop:value=move || campus_location.get()
                            on:input=move |ev| campus_location.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                {move || co2_preview.get().map(|badge| view! {
                    <p class=css::co2Preview>
                        <Icon icon=ic::LEAF />
                        "Estimated " {badge} " saved by this listing"
                    </p>
                })}

                <label class=css::field>
                    <span>"Description"</span>
                    <textarea
                        rows=4
                        placeholder="Describe the item and any flaws"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <fieldset class=css::pickupGroup>
                    <legend>"Handover"</legend>
                    {[PickupMethod::Pickup, PickupMethod::DropOff]
                        .into_iter()
                        .map(|method| {
                            let selected = Signal::derive(move || {
                                pickup_method.get() == Some(method)
                            });
                            view! {
                                <label class=css::pickupOption>
                                    <input
                                        type="radio"
                                        name="pickup"
                                        prop:checked=move || selected.get()
                                        on:change=move |_| pickup_method.set(Some(method))
                                    />
                                    {method.label()}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>

                <div class=css::photoRow>
                    <span class=css::photoCount>
                        <Icon icon=ic::IMAGE />
                        {move || format!("{} of {} photos", image_count.get(), MAX_IMAGES)}
                    </span>
                    <button
                        type="button"
                        class=css::photoButton
                        disabled=move || (image_count.get() >= MAX_IMAGES)
                        on:click=move |_| image_count.update(|n| *n = (*n + 1).min(MAX_IMAGES))
                    >
                        <Icon icon=ic::PLUS />
                        "Add Photo"
                    </button>
                </div>

                {move || error.get().map(|msg| view! {
                    <p class=css::formError>{msg}</p>
                })}
                {move || submitted.get().map(|msg| view! {
                    <p class=css::formSuccess>
                        <Icon icon=ic::CHECK />
                        {msg}
                    </p>
                })}

                <button type="submit" class=css::submitButton>"Publish Listing"</button>
            </form>
        </section>
    }
}
