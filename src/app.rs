//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_outlet::RouteOutlet;
use crate::config::AppConfig;
use crate::net::transport::BrowserTransport;
use crate::routes::table::RouteTable;
use crate::state::session::Session;
use crate::util::storage::LocalStorage;

/// The session type the browser build runs with.
pub type AdminSession = Session<BrowserTransport, LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session once, provides it with the route table and config,
/// and hands every location to [`RouteOutlet`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env();
    let session = Arc::new(AdminSession::from_config(BrowserTransport, LocalStorage, &config));
    let auth = RwSignal::new(session.snapshot());

    provide_context(session);
    provide_context(auth);
    provide_context(RouteTable::default());
    provide_context(config);

    view! {
        <Title text="Booking Admin"/>

        <Router>
            <Routes fallback=|| view! { <RouteOutlet/> }>
                <Route path=StaticSegment("") view=RouteOutlet/>
            </Routes>
        </Router>
    }
}
