//! Signup form with the sustainability pledge checkbox.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::RouterContext;
use crate::config::APP_NAME;
use crate::core::validate::{SignupForm, validate_signup};
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/auth/auth.module.css");

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agreed_pledge = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            full_name: full_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            agreed_pledge: agreed_pledge.get(),
        };
        match validate_signup(&form) {
            Ok(()) => {
                ctx.sign_in(form.full_name, form.email);
                router.navigate(Route::Home);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    view! {
        <section class=css::authPage>
            <div class=css::card>
                <div class=css::cardHeader>
                    <span class=css::cardIcon><Icon icon=ic::SPROUT /></span>
                    <h1>"Join " {APP_NAME}</h1>
                    <p>"Start giving items a second life."</p>
                </div>

                <form class=css::form on:submit=on_submit>
                    <label class=css::field>
                        <span>"Full name"</span>
                        <input
                            type="text"
                            placeholder="Your name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class=css::field>
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@campus.edu"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class=css::field>
                        <span>"Password"</span>
                        <input
                            type="password"
                            placeholder="At least 8 characters, letters and numbers"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class=css::field>
                        <span>"Confirm password"</span>
                        <input
                            type="password"
                            placeholder="Repeat your password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>

                    <label class=css::pledge>
                        <input
                            type="checkbox"
                            prop:checked=move || agreed_pledge.get()
                            on:change=move |_| agreed_pledge.update(|v| *v = !*v)
                        />
                        <span>
                            "I pledge to exchange items honestly and keep reusable \
                             things out of the landfill."
                        </span>
                    </label>

                    {move || error.get().map(|msg| view! {
                        <p class=css::formError>{msg}</p>
                    })}

                    <button type="submit" class=css::submitButton>"Create Account"</button>
                </form>

                <p class=css::switchLine>
                    "Already have an account? "
                    <button
                        class=css::switchLink
                        on:click=move |_| router.navigate(Route::Login)
                    >
                        "Sign in"
                    </button>
                </p>
            </div>
        </section>
    }
}
