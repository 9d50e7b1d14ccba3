//! Application router component.
//!
//! Handles URL-based routing with hash history for static-host
//! compatibility. Uses native hashchange events instead of leptos_router
//! for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: Navigation state is derived from `#/page`
//! - **Layout never re-renders on navigation**: Header and Footer stay mounted
//! - **hashchange events**: Browser back/forward buttons work automatically
//! - **Programmatic navigation**: `RouterContext::navigate` pushes history
//!   and updates the route signal (pushState does not fire hashchange)

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::auth::{LoginPage, SignupPage};
use crate::components::community::{CommunityPage, EventDetailPage};
use crate::components::explore::ExplorePage;
use crate::components::impact::ImpactPage;
use crate::components::item_detail::ItemDetailPage;
use crate::components::layout::{Footer, Header, Hero};
use crate::components::list_item::ListItemPage;
use crate::components::profile::ProfilePage;
use crate::models::Route;
use crate::utils::dom::scroll_to_top;

// ============================================================================
// Router Context
// ============================================================================

/// Navigation handle provided to every component under the router.
#[derive(Clone, Copy)]
pub struct RouterContext {
    /// Current route, kept in sync with the URL hash.
    pub route: RwSignal<Route>,
}

impl RouterContext {
    /// Navigate to a route: push a history entry and update the signal.
    pub fn navigate(&self, route: Route) {
        route.push();
        self.route.set(route);
        scroll_to_top();
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → Home (hero + explore grid)
/// - `#/explore` → Explore grid (optionally `?search=` seeded)
/// - `#/items/<id>` → Item detail
/// - `#/list` → List an item form
/// - `#/impact` → Impact tracker
/// - `#/community` → Community feed
/// - `#/events/<id>` → Community event detail
/// - `#/profile` → Signed-in user's profile
/// - `#/login`, `#/signup` → Auth forms
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let router_ctx = RouterContext { route };
    provide_context(router_ctx);

    let route_memo = Memo::new(move |_| route.get());

    view! {
        <Header />
        <main>
            {move || match route_memo.get() {
                Route::Home => view! {
                    <Hero />
                    <ExplorePage seed_search=None />
                }.into_any(),
                Route::Explore { search } => view! {
                    <ExplorePage seed_search=search />
                }.into_any(),
                Route::Item { id } => view! {
                    <ItemDetailPage id=id />
                }.into_any(),
                Route::ListItem => view! { <ListItemPage /> }.into_any(),
                Route::Impact => view! { <ImpactPage /> }.into_any(),
                Route::Community => view! { <CommunityPage /> }.into_any(),
                Route::Event { id } => view! {
                    <EventDetailPage id=id />
                }.into_any(),
                Route::Profile => view! { <ProfilePage /> }.into_any(),
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Signup => view! { <SignupPage /> }.into_any(),
            }}
        </main>
        <Footer />
    }
}
