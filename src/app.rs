//! Root application module.
//!
//! Contains the main App component, AppContext definition, CatalogState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AppRouter;
use crate::core::error::CatalogError;
use crate::core::repository;
use crate::core::{FilterChange, FilterState, advance_page, apply_filter_change};
use crate::core::{compute_visible, count_matching};
use crate::config;
use crate::models::{Item, SessionState};
use crate::utils::cache;

// ============================================================================
// CatalogState
// ============================================================================

/// Catalog state managed with Leptos signals.
///
/// Holds the fetched item snapshot and the current filter/pagination
/// state. All filter mutations funnel through [`CatalogState::apply`] and
/// [`CatalogState::load_more`] so the engine's atomic page-reset rule
/// cannot be bypassed by a stray `update`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct CatalogState {
    /// Active items fetched from the repository, in fetch order.
    pub items: RwSignal<Vec<Item>>,
    /// Current search/facet/pagination state.
    pub filter: RwSignal<FilterState>,
    /// True while the initial fetch or a filter recompute is pending.
    pub loading: RwSignal<bool>,
    /// Human-readable fetch failure, shown in place of the grid.
    pub fetch_error: RwSignal<Option<String>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            filter: RwSignal::new(FilterState::default()),
            loading: RwSignal::new(true),
            fetch_error: RwSignal::new(None),
        }
    }

    /// Apply a filter criterion change (resets pagination atomically).
    pub fn apply(&self, change: FilterChange) {
        self.filter.update(|state| {
            *state = apply_filter_change(state, change);
        });
    }

    /// Reveal the next page of results.
    pub fn load_more(&self) {
        self.filter.update(|state| {
            *state = advance_page(state);
        });
    }

    /// The currently visible page of results, in catalog order.
    pub fn visible_items(&self) -> Result<Vec<Item>, CatalogError> {
        self.items.with(|items| {
            self.filter.with(|state| {
                compute_visible(items, state).map(|v| v.into_iter().cloned().collect())
            })
        })
    }

    /// Total number of items matching the criteria, ignoring pagination.
    pub fn total_matching(&self) -> usize {
        self.items
            .with(|items| self.filter.with(|state| count_matching(items, state)))
    }

    /// Look up a single item for the detail page.
    pub fn item_by_id(&self, id: &str) -> Option<Item> {
        self.items
            .with(|items| items.iter().find(|item| item.id == id).cloned())
    }

    /// Mark an item's exchange as done.
    ///
    /// The item drops out of the explore grid on the next recompute
    /// (only active items are visible) and the cached snapshot is
    /// invalidated so a reload reflects the backend's view.
    pub fn mark_completed(&self, id: &str) {
        let mut changed = false;
        self.items.update(|items| {
            if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                changed = item.mark_completed();
            }
        });
        if changed {
            cache::invalidate(config::cache::ITEMS_KEY);
        }
    }

    /// Fetch the catalog snapshot from the repository.
    async fn fetch(&self) {
        match repository::fetch_active_items().await {
            Ok(items) => {
                self.items.set(items);
                self.fetch_error.set(None);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("ecoswap: fetch failed: {}", err).into());
                self.fetch_error.set(Some(err.to_string()));
            }
        }
        self.loading.set(false);
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Catalog state**: Item snapshot, filters, pagination
/// - **Session state**: Who the UI believes is signed in
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Catalog state (items, filters, pagination).
    pub catalog: CatalogState,

    /// Signed-in session state, restored from localStorage.
    pub session: RwSignal<SessionState>,
}

impl AppContext {
    /// Creates a new application context.
    ///
    /// The catalog starts empty and loading; the session is restored
    /// from localStorage (Guest when nothing is persisted).
    pub fn new() -> Self {
        Self {
            catalog: CatalogState::new(),
            session: RwSignal::new(SessionState::load()),
        }
    }

    /// Establish a signed-in session and persist it.
    pub fn sign_in(&self, full_name: String, email: String) {
        let state = SessionState::SignedIn { full_name, email };
        state.store();
        self.session.set(state);
    }

    /// Drop the session and its persisted copy.
    pub fn sign_out(&self) {
        SessionState::clear_persisted();
        self.session.set(SessionState::Guest);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Kicks off the one-time catalog fetch
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    // Catalog fetch runs once
    let fetch_started = StoredValue::new(false);
    Effect::new(move || {
        if !fetch_started.get_value() {
            fetch_started.set_value(true);
            spawn_local(async move {
                ctx.catalog.fetch().await;
            });
        }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f7fdf5;
                    color: #1f2937;
                    font-family: sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #b91c1c; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6b7280; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6b7280;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #b91c1c;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #15803d;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 9999px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
