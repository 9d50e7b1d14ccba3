//! Site header with logo, navigation, search, and session controls.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::RouterContext;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Top navigation bar, mounted for the lifetime of the app.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    let (menu_open, set_menu_open) = signal(false);
    let search_text = RwSignal::new(String::new());

    let session = ctx.session;
    let signed_in = Signal::derive(move || session.with(|s| s.is_signed_in()));
    let display_name = Signal::derive(move || session.with(|s| s.display_name()));

    // Submitting the header search always lands on explore
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = search_text.get().trim().to_string();
        let search = (!query.is_empty()).then_some(query);
        router.navigate(Route::Explore { search });
    };

    let nav_link = move |route: Route, label: &'static str| {
        let target = route.clone();
        let active = Signal::derive(move || router.route.get() == route);
        view! {
            <button
                class=move || {
                    if active.get() {
                        format!("{} {}", css::navLink, css::navLinkActive)
                    } else {
                        css::navLink.to_string()
                    }
                }
                on:click=move |_| {
                    set_menu_open.set(false);
                    router.navigate(target.clone());
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <header class=css::header>
            <div class=css::headerInner>
                <button class=css::logo on:click=move |_| router.navigate(Route::Home)>
                    <span class=css::logoIcon><Icon icon=ic::LEAF /></span>
                    <span class=css::logoText>
                        <span class=css::logoName>{APP_NAME}</span>
                        <span class=css::logoTagline>{APP_TAGLINE}</span>
                    </span>
                </button>

                <form class=css::searchForm on:submit=on_search>
                    <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                    <input
                        type="search"
                        class=css::searchInput
                        placeholder="Search items..."
                        prop:value=move || search_text.get()
                        on:input=move |ev| search_text.set(event_target_value(&ev))
                    />
                </form>

                <nav class=move || {
                    if menu_open.get() {
                        format!("{} {}", css::nav, css::navOpen)
                    } else {
                        css::nav.to_string()
                    }
                }>
                    {nav_link(Route::Explore { search: None }, "Explore")}
                    {nav_link(Route::Impact, "My Impact")}
                    {nav_link(Route::Community, "Community")}

                    <button
                        class=css::listButton
                        on:click=move |_| {
                            set_menu_open.set(false);
                            router.navigate(Route::ListItem);
                        }
                    >
                        <Icon icon=ic::PLUS />
                        "List an Item"
                    </button>

                    <Show
                        when=move || signed_in.get()
                        fallback=move || view! {
                            <button
                                class=css::authButton
                                on:click=move |_| {
                                    set_menu_open.set(false);
                                    router.navigate(Route::Login);
                                }
                            >
                                <Icon icon=ic::USER />
                                "Sign In"
                            </button>
                        }
                    >
                        <div class=css::sessionBox>
                            <button
                                class=css::sessionName
                                on:click=move |_| {
                                    set_menu_open.set(false);
                                    router.navigate(Route::Profile);
                                }
                            >
                                <Icon icon=ic::USER />
                                {move || display_name.get()}
                            </button>
                            <button
                                class=css::authButton
                                on:click=move |_| {
                                    set_menu_open.set(false);
                                    ctx.sign_out();
                                }
                            >
                                "Sign Out"
                            </button>
                        </div>
                    </Show>
                </nav>

                <button
                    class=css::menuToggle
                    on:click=move |_| set_menu_open.update(|v| *v = !*v)
                    title="Toggle menu"
                >
                    {move || if menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>
            </div>
        </header>
    }
}
