//! Progress & reputation section: mastery ring plus milestone track.

#[cfg(test)]
#[path = "progress_section_test.rs"]
mod progress_section_test;

use leptos::prelude::*;

const RING_RADIUS: f64 = 40.0;

/// Circumference of the mastery ring.
#[must_use]
pub fn ring_circumference(radius: f64) -> f64 {
    std::f64::consts::TAU * radius
}

/// Stroke dash offset for a given progress percentage: the full
/// circumference at 0%, zero at 100%.
#[must_use]
pub fn ring_offset(radius: f64, progress: i64) -> f64 {
    let circumference = ring_circumference(radius);
    #[allow(clippy::cast_precision_loss)]
    let fraction = (progress.clamp(0, 100) as f64) / 100.0;
    circumference * (1.0 - fraction)
}

/// Wide panel showing overall path mastery and upcoming milestones.
#[component]
pub fn ProgressSection(#[prop(into)] progress: Signal<i64>) -> impl IntoView {
    let circumference = ring_circumference(RING_RADIUS);
    let offset = move || format!("{:.1}", ring_offset(RING_RADIUS, progress.get()));

    view! {
        <div class="panel progress-section">
            <div class="panel__header">
                <span class="panel__title">"Progress & Reputation"</span>
                <div class="progress-section__streak">
                    <span class="progress-section__streak-label">"Consistency Score"</span>
                    <span class="progress-section__streak-value">"Perfect Streak"</span>
                </div>
            </div>

            <div class="progress-section__body">
                <div class="progress-section__mastery">
                    <svg viewBox="0 0 100 100" role="img" aria-label="Path mastery">
                        <circle
                            class="progress-section__track"
                            cx="50"
                            cy="50"
                            r="40"
                            fill="transparent"
                            stroke-width="10"
                        ></circle>
                        <circle
                            class="progress-section__meter"
                            cx="50"
                            cy="50"
                            r="40"
                            fill="transparent"
                            stroke-width="10"
                            stroke-linecap="round"
                            stroke-dasharray=format!("{circumference:.1}")
                            stroke-dashoffset=offset
                        ></circle>
                    </svg>
                    <div class="progress-section__percent">{move || format!("{}%", progress.get())}</div>
                    <span class="progress-section__caption">"Path Mastery"</span>
                </div>

                <div class="progress-section__track-list">
                    <div class="milestone milestone--done">
                        <span class="milestone__date">"Feb 01"</span>
                        <div class="milestone__node">"✓"</div>
                        <span class="milestone__name">"Shell Basics"</span>
                    </div>
                    <div class="milestone milestone--current">
                        <span class="milestone__date">"Today"</span>
                        <div class="milestone__node">"JS"</div>
                        <span class="milestone__name">"DOM Manipulation"</span>
                    </div>
                    <div class="milestone milestone--upcoming">
                        <span class="milestone__date">"Feb 15"</span>
                        <div class="milestone__node">"03"</div>
                        <span class="milestone__name">"Advanced Python"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
