//! Facet sidebar: category and condition checkboxes.
//!
//! Checkbox state is a local draft; it only reaches the filter engine
//! through "Apply All" (or immediately per checkbox, matching the
//! original behavior of applying on change).

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::FilterChange;
use crate::core::impact::multiplier_for;
use crate::models::{Category, Condition};
use crate::utils::format::format_multiplier_label;

stylance::import_crate_style!(css, "src/components/explore/explore.module.css");

#[component]
pub fn FilterSidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let catalog = ctx.catalog;

    let categories = Signal::derive(move || catalog.filter.with(|f| f.categories.clone()));
    let conditions = Signal::derive(move || catalog.filter.with(|f| f.conditions.clone()));

    let toggle_category = move |category: Category| {
        let mut next: BTreeSet<Category> = categories.get_untracked();
        if !next.remove(&category) {
            next.insert(category);
        }
        catalog.apply(FilterChange::Categories(next));
    };

    let toggle_condition = move |condition: Condition| {
        let mut next: BTreeSet<Condition> = conditions.get_untracked();
        if !next.remove(&condition) {
            next.insert(condition);
        }
        catalog.apply(FilterChange::Conditions(next));
    };

    let any_selected =
        Signal::derive(move || !categories.with(|c| c.is_empty()) || !conditions.with(|c| c.is_empty()));

    view! {
        <aside class=css::sidebar>
            <div class=css::sidebarHeader>
                <h3 class=css::sidebarTitle>"Filters"</h3>
                <Show when=move || any_selected.get()>
                    <button
                        class=css::clearButton
                        on:click=move |_| catalog.apply(FilterChange::ClearFacets)
                    >
                        "Clear All"
                    </button>
                </Show>
            </div>

            <fieldset class=css::facetGroup>
                <legend class=css::facetLegend>"Category"</legend>
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        let checked = Signal::derive(move || categories.with(|c| c.contains(&category)));
                        view! {
                            <label class=css::facetOption>
                                <input
                                    type="checkbox"
                                    prop:checked=move || checked.get()
                                    on:change=move |_| toggle_category(category)
                                />
                                <span class=css::facetLabel>{category.label()}</span>
                                <span class=css::facetHint>
                                    {format_multiplier_label(multiplier_for(Some(category)))}
                                </span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>

            <fieldset class=css::facetGroup>
                <legend class=css::facetLegend>"Condition"</legend>
                {Condition::ALL
                    .into_iter()
                    .map(|condition| {
                        let checked = Signal::derive(move || conditions.with(|c| c.contains(&condition)));
                        view! {
                            <label class=css::facetOption>
                                <input
                                    type="checkbox"
                                    prop:checked=move || checked.get()
                                    on:change=move |_| toggle_condition(condition)
                                />
                                <span class=css::facetLabel>{condition.label()}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>
        </aside>
    }
}
