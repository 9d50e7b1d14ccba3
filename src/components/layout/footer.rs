//! Site footer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouterContext;
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    view! {
        <footer class=css::footer>
            <div class=css::footerInner>
                <div class=css::footerBrand>
                    <span class=css::logoIcon><Icon icon=ic::LEAF /></span>
                    <span>{APP_NAME} " · give items a second life"</span>
                </div>
                <nav class=css::footerNav>
                    <button
                        class=css::footerLink
                        on:click=move |_| router.navigate(Route::Explore { search: None })
                    >
                        "Explore"
                    </button>
                    <button
                        class=css::footerLink
                        on:click=move |_| router.navigate(Route::Impact)
                    >
                        "My Impact"
                    </button>
                    <button
                        class=css::footerLink
                        on:click=move |_| router.navigate(Route::Community)
                    >
                        "Community"
                    </button>
                </nav>
                <span class=css::footerVersion>"v" {APP_VERSION}</span>
            </div>
        </footer>
    }
}
