//! Single routing outlet driven by the route table and guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos router only supplies the location; matching and auth checks
//! happen here so every path goes through the same table and guard. A
//! protected view renders only once the guard has allowed that exact path.

#[cfg(test)]
#[path = "route_outlet_test.rs"]
mod route_outlet_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AdminSession;
use crate::config::AppConfig;
use crate::pages::login::AdminLoginPage;
use crate::pages::shell::PageShell;
use crate::routes::guard::Navigation;
use crate::routes::table::{RouteTable, View};
use crate::state::auth::AuthState;

/// Guard verdict together with the path it was reached for.
type Verdict = (String, Navigation);

/// Whether `path` may render given the latest guard verdict.
fn may_render(table: &RouteTable, path: &str, verdict: &Verdict) -> bool {
    if !table.requires_auth(path) {
        return true;
    }
    verdict.0 == path && verdict.1 == Navigation::Allowed
}

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let session = expect_context::<Arc<AdminSession>>();
    let table = expect_context::<RouteTable>();
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let verdict = RwSignal::new((String::new(), Navigation::Pending));

    let guard_table = table.clone();
    Effect::new(move || {
        let target = location.pathname.get();
        if !guard_table.requires_auth(&target) {
            verdict.set((target, Navigation::Allowed));
            return;
        }
        verdict.set((target.clone(), Navigation::Pending));

        #[cfg(feature = "hydrate")]
        {
            use crate::routes::guard::NavigationGuard;
            use leptos_router::NavigateOptions;

            let session = session.clone();
            let table = guard_table.clone();
            let login_path = config.login_path.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let nav = NavigationGuard::new(&session, &table, &login_path).before_each(&target).await;
                auth.set(session.snapshot());
                if session.has_owed_logouts() {
                    let notifier = session.clone();
                    leptos::task::spawn_local(async move { notifier.send_owed_logouts().await });
                }
                if location.pathname.get_untracked() != target {
                    return;
                }
                if let Navigation::Redirected { to } = &nav {
                    navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                verdict.set((target, nav));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &config, &auth, &navigate);
        }
    });

    move || {
        let path = location.pathname.get();
        let Some(matched) = table.resolve(&path) else {
            return view! { <p class="route-missing">"Page not found."</p> }.into_any();
        };
        if !verdict.with(|v| may_render(&table, &path, v)) {
            return view! { <p class="route-pending">"Checking session..."</p> }.into_any();
        }
        render_view(matched.entry.view, matched.param("id").map(str::to_owned))
    }
}

fn render_view(page: View, id: Option<String>) -> AnyView {
    match page {
        View::AdminLogin => view! { <AdminLoginPage/> }.into_any(),
        other => view! { <PageShell page=other id=id/> }.into_any(),
    }
}
