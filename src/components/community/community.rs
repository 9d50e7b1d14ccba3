//! Community page: upcoming events and success stories.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouterContext;
use crate::models::{Route, success_stories, upcoming_events};

stylance::import_crate_style!(css, "src/components/community/community.module.css");

#[component]
pub fn CommunityPage() -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");
    let events = upcoming_events();
    let stories = success_stories();

    view! {
        <section class=css::community>
            <header class=css::pageHeader>
                <h1>"Community"</h1>
                <p>"Meet the people keeping campus items in circulation."</p>
            </header>

            <div class=css::columns>
                <div class=css::column>
                    <h2 class=css::sectionTitle>
                        <Icon icon=ic::CALENDAR />
                        "Upcoming Events"
                    </h2>
                    <ul class=css::eventList>
                        {events
                            .into_iter()
                            .map(|event| {
                                let day = event.day().to_string();
                                let month = event.month().to_string();
                                let event_id = event.id;
                                view! {
                                <li
                                    class=css::eventCard
                                    on:click=move |_| router.navigate(Route::Event {
                                        id: event_id.to_string(),
                                    })
                                >
                                    <div class=css::eventDate>
                                        <span class=css::eventDay>{day}</span>
                                        <span class=css::eventMonth>{month}</span>
                                    </div>
                                    <div class=css::eventBody>
                                        <h3 class=css::eventTitle>{event.title}</h3>
                                        <p class=css::eventDescription>{event.description}</p>
                                    </div>
                                </li>
                            }})
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div class=css::column>
                    <h2 class=css::sectionTitle>
                        <Icon icon=ic::USERS />
                        "Success Stories"
                    </h2>
                    <ul class=css::storyList>
                        {stories
                            .into_iter()
                            .map(|story| view! {
                                <li class=css::storyCard>
                                    <blockquote class=css::storyQuote>
                                        "\u{201c}" {story.quote} "\u{201d}"
                                    </blockquote>
                                    <div class=css::storyByline>
                                        <span class=css::storyAvatar><Icon icon=ic::USER /></span>
                                        <div>
                                            <span class=css::storyName>{story.name}</span>
                                            <span class=css::storyRole>{story.role}</span>
                                        </div>
                                    </div>
                                </li>
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
