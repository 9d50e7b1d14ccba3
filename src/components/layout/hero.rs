//! Landing hero banner shown above the explore grid on the home page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouterContext;
use crate::models::Route;
use crate::utils::dom::focus_search_input;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Hero() -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    view! {
        <section class=css::hero>
            <div class=css::heroInner>
                <h1 class=css::heroTitle>
                    "Swap, donate, and discover pre-loved items on campus"
                </h1>
                <p class=css::heroSubtitle>
                    "Every item you keep in circulation saves CO₂ and keeps \
                     usable things out of the landfill."
                </p>
                <div class=css::heroActions>
                    <button
                        class=css::heroPrimary
                        on:click=move |_| focus_search_input()
                    >
                        <Icon icon=ic::SEARCH />
                        "Start Browsing"
                    </button>
                    <button
                        class=css::heroSecondary
                        on:click=move |_| router.navigate(Route::ListItem)
                    >
                        <Icon icon=ic::RECYCLE />
                        "List an Item"
                    </button>
                </div>
            </div>
        </section>
    }
}
