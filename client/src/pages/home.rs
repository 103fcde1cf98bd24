//! Home page: learning path tabs, project card, skill chart, events,
//! and the progress & reputation section.

use leptos::prelude::*;

use crate::components::events_list::EventsList;
use crate::components::header::Header;
use crate::components::level_chart::LevelChart;
use crate::components::progress_section::ProgressSection;
use crate::components::project_card::ProjectCard;
use crate::state::paths::{DEFAULT_PATH, learning_paths};

/// Fixed increment applied per "Update progress" click.
#[cfg(feature = "hydrate")]
const PROGRESS_STEP: i64 = 5;

#[component]
pub fn HomePage() -> impl IntoView {
    let progress = RwSignal::new(0_i64);
    let active_path = RwSignal::new(DEFAULT_PATH);

    // Initial fetch on mount.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                progress.set(crate::net::api::fetch_progress().await);
            });
        }
    });

    let on_update = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                progress.set(crate::net::api::increment_progress(PROGRESS_STEP).await);
            });
        }
    });

    view! {
        <div class="home-page">
            <Header/>

            <div class="path-strip">
                {learning_paths()
                    .into_iter()
                    .map(|path| {
                        view! {
                            <button
                                class="path-strip__tab"
                                class:path-strip__tab--active=move || active_path.get() == path
                                on:click=move |_| active_path.set(path)
                            >
                                {path}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="home-page__grid">
                <ProjectCard progress=progress on_update=on_update/>
                <LevelChart/>
                <EventsList/>
            </div>

            <ProgressSection progress=progress/>
        </div>
    }
}
