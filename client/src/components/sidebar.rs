//! Fixed sidebar navigation between the three dashboard pages.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Sidebar with home / reviews / tools navigation and the profile avatar.
#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let is_active = move |path: &'static str| pathname.get() == path;

    view! {
        <aside class="sidebar">
            <nav class="sidebar__nav">
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=move || is_active("/")
                    href="/"
                    title="Home Dashboard"
                >
                    "⌂"
                </a>
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=move || is_active("/reviews")
                    href="/reviews"
                    title="Review Management"
                >
                    "❝"
                </a>
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=move || is_active("/tools")
                    href="/tools"
                    title="Tool Library"
                >
                    "▤"
                </a>
            </nav>
            <div class="sidebar__footer">
                <img
                    class="sidebar__avatar"
                    src="https://picsum.photos/40/40?random=profile"
                    alt="Profile"
                />
            </div>
        </aside>
    }
}
