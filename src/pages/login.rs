//! Admin login page: email + password against `POST /admin/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard sends every unauthenticated admin navigation here. A successful
//! sign-in lands on the dashboard; failures show the server's message.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::AdminSession;
use crate::state::auth::AuthState;

/// Where a successful sign-in goes.
pub const AFTER_LOGIN_PATH: &str = "/admin/dashboard";

const MISSING_INPUT_MESSAGE: &str = "Enter both email and password.";

/// Trim the email and require both fields. The password is sent as typed.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_INPUT_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = expect_context::<Arc<AdminSession>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = leptos_router::hooks::use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::LoginOutcome;

            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(&email_value, &password_value).await {
                    LoginOutcome::Success => {
                        auth.set(session.snapshot());
                        password.set(String::new());
                        info.set(String::new());
                        navigate(AFTER_LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    LoginOutcome::Failure { error } => info.set(error),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &auth, &navigate, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Booking Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage listings"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
