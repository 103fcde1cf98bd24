//! Radar chart of the student's skill levels, drawn as inline SVG.

#[cfg(test)]
#[path = "level_chart_test.rs"]
mod level_chart_test;

use leptos::prelude::*;

use crate::state::skills::{SkillLevel, seed_skills};

const CX: f64 = 150.0;
const CY: f64 = 135.0;
const RADIUS: f64 = 95.0;

/// Vertex `index` of `total` at the given radius fraction. Axis 0 points
/// straight up; the rest follow clockwise.
#[must_use]
pub fn vertex(index: usize, total: usize, fraction: f64, cx: f64, cy: f64, radius: f64) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let angle = -std::f64::consts::FRAC_PI_2
        + (index as f64) * std::f64::consts::TAU / (total as f64);
    (
        cx + radius * fraction * angle.cos(),
        cy + radius * fraction * angle.sin(),
    )
}

/// SVG `points` string for a regular grid ring at `fraction` of the radius.
#[must_use]
pub fn ring_points(total: usize, fraction: f64, cx: f64, cy: f64, radius: f64) -> String {
    (0..total)
        .map(|i| {
            let (x, y) = vertex(i, total, fraction, cx, cy, radius);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG `points` string for the skill polygon (scores scaled to 0–100).
#[must_use]
pub fn skill_points(skills: &[SkillLevel], cx: f64, cy: f64, radius: f64) -> String {
    let total = skills.len();
    skills
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let (x, y) = vertex(i, total, f64::from(s.score) / 100.0, cx, cy, radius);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Radar chart panel showing the five seeded skill axes.
#[component]
pub fn LevelChart() -> impl IntoView {
    let skills = seed_skills();
    let total = skills.len();
    let polygon = skill_points(&skills, CX, CY, RADIUS);

    let grid = [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|f| {
            let points = ring_points(total, *f, CX, CY, RADIUS);
            view! { <polygon class="level-chart__grid" points=points></polygon> }
        })
        .collect::<Vec<_>>();

    let labels = skills
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let (x, y) = vertex(i, total, 1.18, CX, CY, RADIUS);
            let subject = s.subject.clone();
            view! {
                <text
                    class="level-chart__label"
                    x=format!("{x:.1}")
                    y=format!("{y:.1}")
                    text-anchor="middle"
                >
                    {subject}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="panel level-chart">
            <div class="panel__header">
                <span class="panel__title">"Your level"</span>
            </div>
            <div class="level-chart__body">
                <svg viewBox="0 0 300 270" role="img" aria-label="Skill radar chart">
                    {grid}
                    <polygon class="level-chart__area" points=polygon></polygon>
                    {labels}
                </svg>
            </div>
        </div>
    }
}
