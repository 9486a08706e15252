//! Frame for views whose content lives outside this crate.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;

use crate::components::session_bar::SessionBar;
use crate::routes::table::View;

#[component]
pub fn PageShell(page: View, id: Option<String>) -> impl IntoView {
    let admin = is_admin_view(page);
    let class = if admin { "page page--admin" } else { "page" };
    view! {
        <div class=class>
            <Show when=move || admin>
                <SessionBar/>
            </Show>
            <h1 class="page__title">{page.title()}</h1>
            {id.map(|id| view! { <p class="page__subtitle">{format!("#{id}")}</p> })}
        </div>
    }
}

fn is_admin_view(page: View) -> bool {
    !matches!(page, View::Landing | View::Search | View::Results | View::AirbnbDetail | View::AdminLogin)
}

