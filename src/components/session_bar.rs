//! Admin header strip with the signed-in user and a logout button.

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::AdminSession;
use crate::config::AppConfig;
use crate::state::auth::AuthState;

#[component]
pub fn SessionBar() -> impl IntoView {
    let session = expect_context::<Arc<AdminSession>>();
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = leptos_router::hooks::use_navigate();
    let busy = RwSignal::new(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let login_path = config.login_path.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                session.logout().await;
                auth.set(session.snapshot());
                busy.set(false);
                navigate(&login_path, leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &config, &navigate);
        }
    };

    view! {
        <div class="session-bar">
            <span class="session-bar__user">{move || auth.with(|a| a.user_label().to_owned())}</span>
            <button class="session-bar__logout" on:click=on_logout disabled=move || busy.get()>
                "Log out"
            </button>
        </div>
    }
}
