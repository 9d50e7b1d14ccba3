//! Event detail page, linked from the community feed cards.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouterContext;
use crate::models::{Route, event_by_id};

stylance::import_crate_style!(css, "src/components/community/community.module.css");

#[component]
pub fn EventDetailPage(id: String) -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    let event = event_by_id(&id);

    view! {
        <section class=css::eventDetail>
            <button
                class=css::backButton
                on:click=move |_| router.navigate(Route::Community)
            >
                <Icon icon=ic::ARROW_LEFT />
                "Back to Community"
            </button>

            {match event {
                Some(event) => {
                    let day = event.day().to_string();
                    let month = event.month().to_string();
                    view! {
                        <article class=css::eventDetailCard>
                            <div class=css::eventDate>
                                <span class=css::eventDay>{day}</span>
                                <span class=css::eventMonth>{month}</span>
                            </div>
                            <h1 class=css::eventDetailTitle>{event.title}</h1>
                            <ul class=css::eventFacts>
                                <li>
                                    <Icon icon=ic::CALENDAR />
                                    {event.time}
                                </li>
                                <li>
                                    <Icon icon=ic::LOCATION />
                                    {event.location}
                                </li>
                            </ul>
                            <p class=css::eventDetailDescription>{event.description}</p>
                        </article>
                    }.into_any()
                }
                None => view! {
                    <div class=css::eventMissing>
                        <h2>"Event not found"</h2>
                        <p>"It may have already happened."</p>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
