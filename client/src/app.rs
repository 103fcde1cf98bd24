//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::help_chat::HelpChat;
use crate::components::sidebar::Sidebar;
use crate::pages::{home::HomePage, reviews::ReviewsPage, tools::ToolsPage};
use crate::state::chat::ChatState;

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
/// Provides the shared chat state and sets up client-side routing. The
/// sidebar and the help-chat launcher stay mounted across page changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/cohort-ui.css"/>
        <Title text="Cohort"/>

        <Router>
            <div class="portal">
                <Sidebar/>
                <main class="portal__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("reviews") view=ReviewsPage/>
                        <Route path=StaticSegment("tools") view=ToolsPage/>
                    </Routes>
                </main>
                <HelpChat/>
            </div>
        </Router>
    }
}
