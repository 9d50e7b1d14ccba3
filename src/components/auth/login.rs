//! Login form.
//!
//! Validation runs through `core::validate`; the session itself is a
//! local mock (no backend auth in this build).

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::RouterContext;
use crate::config::APP_NAME;
use crate::core::validate::validate_login;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/auth/auth.module.css");

/// Display name derived from the email local part, e.g. "sarah.k" → "Sarah.k".
fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => local.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_string();
        match validate_login(&email_value, &password.get()) {
            Ok(()) => {
                ctx.sign_in(name_from_email(&email_value), email_value);
                router.navigate(Route::Home);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    view! {
        <section class=css::authPage>
            <div class=css::card>
                <div class=css::cardHeader>
                    <span class=css::cardIcon><Icon icon=ic::LEAF /></span>
                    <h1>"Welcome back to " {APP_NAME}</h1>
                    <p>"Sign in to keep swapping."</p>
                </div>

                <form class=css::form on:submit=on_submit>
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
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|msg| view! {
                        <p class=css::formError>{msg}</p>
                    })}

                    <button type="submit" class=css::submitButton>"Sign In"</button>
                </form>

                <p class=css::switchLine>
                    "New here? "
                    <button
                        class=css::switchLink
                        on:click=move |_| router.navigate(Route::Signup)
                    >
                        "Create an account"
                    </button>
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_email() {
        assert_eq!(name_from_email("sarah@campus.edu"), "Sarah");
        assert_eq!(name_from_email("lisa.m@campus.edu"), "Lisa.m");
    }
}
