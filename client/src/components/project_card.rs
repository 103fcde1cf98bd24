//! Current project card with a conic progress ring and update button.

use leptos::prelude::*;

/// Card showing the active project and its completion percentage.
///
/// `on_update` is invoked when the student clicks the progress button;
/// the parent owns the gateway call and the shared progress signal.
#[component]
pub fn ProjectCard(#[prop(into)] progress: Signal<i64>, on_update: Callback<()>) -> impl IntoView {
    let ring_style = move || {
        let pct = progress.get();
        format!("background: conic-gradient(var(--accent-sky) {pct}%, var(--ring-track) {pct}%)")
    };

    let button_label = move || {
        if progress.get() == 100 {
            "Review project"
        } else {
            "Update progress"
        }
    };

    view! {
        <div class="panel project-card">
            <div class="project-card__ring" style=ring_style>
                <div class="project-card__ring-inner">
                    <span class="project-card__badge">"JS"</span>
                </div>
            </div>
            <div class="project-card__percent">{move || format!("{}%", progress.get())}</div>

            <div class="project-card__meta">
                <h2 class="project-card__title">"JavaScript DOM" <br/> "manipulation"</h2>
                <p class="project-card__due">"Sprint 2 · Due in 3 days"</p>
            </div>

            <button class="btn btn--primary project-card__action" on:click=move |_| on_update.run(())>
                {button_label}
            </button>
        </div>
    }
}
