//! Home page header.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>"Your learning path"</h1>
        </header>
    }
}
