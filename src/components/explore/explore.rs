//! Explore page: the catalog grid with search, tabs, and pagination.
//!
//! Every state transition goes through the filter engine
//! (`apply_filter_change` / `advance_page`); this component never mutates
//! `FilterState` fields directly, so the page-reset rule always holds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::explore::filter_sidebar::FilterSidebar;
use crate::components::explore::product_card::ProductCard;
use crate::components::icons as ic;
use crate::config::{FILTER_LOADING_DELAY_MS, SAFETY_DISCLAIMER};
use crate::core::{FilterChange, FilterState, TypeTab};
use crate::models::Item;

stylance::import_crate_style!(css, "src/components/explore/explore.module.css");

/// Catalog grid with search, All/Donate/Swap tabs, facet sidebar, and
/// Load More pagination.
///
/// `seed_search` pre-fills the search criterion when the page is reached
/// via `#/explore?search=...` (e.g. from the header search form).
#[component]
pub fn ExplorePage(seed_search: Option<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let catalog = ctx.catalog;

    // Arriving via `?search=` starts a fresh filter seeded with the query;
    // without a seed the current filter carries over.
    if let Some(query) = seed_search {
        catalog.filter.set(FilterState::with_search(query));
    }

    let search_text = RwSignal::new(catalog.filter.with_untracked(|f| f.search_text.clone()));

    // Simulated skeleton delay whenever the filter changes. The epoch
    // counter discards stale wakeups when filters change in quick
    // succession.
    let filter_busy = RwSignal::new(false);
    let epoch = StoredValue::new(0u32);
    Effect::new(move |prev: Option<()>| {
        catalog.filter.track();
        // Skip the delay for the very first run (initial mount)
        if prev.is_some() {
            let this_epoch = epoch.get_value() + 1;
            epoch.set_value(this_epoch);
            filter_busy.set(true);
            spawn_local(async move {
                TimeoutFuture::new(FILTER_LOADING_DELAY_MS).await;
                if epoch.get_value() == this_epoch {
                    filter_busy.set(false);
                }
            });
        }
    });

    let loading = Signal::derive(move || catalog.loading.get() || filter_busy.get());

    let visible = Memo::new(move |_| match catalog.visible_items() {
        Ok(items) => items,
        Err(err) => {
            web_sys::console::error_1(&format!("ecoswap: catalog error: {}", err).into());
            Vec::new()
        }
    });
    let total = Memo::new(move |_| catalog.total_matching());
    let has_more = Signal::derive(move || visible.with(|v| v.len()) < total.get());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        catalog.apply(FilterChange::Search(search_text.get()));
    };

    view! {
        <section class=css::explore>
            <p class=css::disclaimer>{SAFETY_DISCLAIMER}</p>

            <div class=css::toolbar>
                <form class=css::searchForm on:submit=on_search>
                    <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                    <input
                        type="search"
                        class=css::searchInput
                        placeholder="Search by title..."
                        prop:value=move || search_text.get()
                        on:input=move |ev| search_text.set(event_target_value(&ev))
                    />
                </form>
                <TypeTabs />
            </div>

            <div class=css::content>
                <FilterSidebar />

                <div class=css::results>
                    {move || catalog.fetch_error.get().map(|msg| view! {
                        <div class=css::fetchError>
                            <p>"Could not load the catalog."</p>
                            <p class=css::fetchErrorDetail>{msg}</p>
                        </div>
                    })}

                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <SkeletonGrid /> }
                    >
                        <ResultsGrid visible=visible total=total has_more=has_more />
                    </Show>
                </div>
            </div>
        </section>
    }
}

/// All / Donate / Swap listing-type tabs.
#[component]
fn TypeTabs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let catalog = ctx.catalog;
    let active_tab = Signal::derive(move || catalog.filter.with(|f| f.active_tab));

    view! {
        <div class=css::tabs role="tablist">
            {TypeTab::ALL_TABS
                .into_iter()
                .map(|tab| {
                    let selected = Signal::derive(move || active_tab.get() == tab);
                    view! {
                        <button
                            role="tab"
                            class=move || {
                                if selected.get() {
                                    format!("{} {}", css::tab, css::tabActive)
                                } else {
                                    css::tab.to_string()
                                }
                            }
                            aria-selected=move || selected.get().to_string()
                            on:click=move |_| catalog.apply(FilterChange::Tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// The visible page of cards plus result count and Load More.
#[component]
fn ResultsGrid(
    visible: Memo<Vec<Item>>,
    total: Memo<usize>,
    has_more: Signal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let catalog = ctx.catalog;

    view! {
        <Show
            when=move || (total.get() > 0)
            fallback=|| view! { <NoResults /> }
        >
            <p class=css::resultCount>
                {move || {
                    let shown = visible.with(|v| v.len());
                    format!("Showing {} of {} items", shown, total.get())
                }}
            </p>
            <div class=css::grid>
                <For
                    each=move || visible.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <ProductCard item=item /> }
                />
            </div>
            <Show when=move || has_more.get()>
                <div class=css::loadMoreRow>
                    <button
                        class=css::loadMoreButton
                        on:click=move |_| catalog.load_more()
                    >
                        "Load More"
                    </button>
                </div>
            </Show>
        </Show>
    }
}

/// Empty state shown when no active item matches the criteria.
#[component]
fn NoResults() -> impl IntoView {
    view! {
        <div class=css::noResults>
            <span class=css::noResultsIcon><Icon icon=ic::SEARCH /></span>
            <h3>"No items found"</h3>
            <p>"Try a different search or clear some filters."</p>
        </div>
    }
}

/// Placeholder cards shown during the simulated filter delay and the
/// initial fetch.
#[component]
fn SkeletonGrid() -> impl IntoView {
    view! {
        <div class=css::grid>
            {(0..8)
                .map(|_| view! {
                    <div class=css::skeletonCard>
                        <div class=css::skeletonImage></div>
                        <div class=css::skeletonLine></div>
                        <div class=css::skeletonLineShort></div>
                    </div>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
