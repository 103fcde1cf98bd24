//! Project progress routes.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Serialize)]
pub struct ProgressResponse {
    pub progress: i64,
}

#[derive(Deserialize)]
pub struct UpdateBody {
    pub increment: i64,
}

/// `GET /api/progress` — current project progress percentage.
pub async fn get_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let portal = state.portal.read().await;
    Json(ProgressResponse { progress: portal.progress })
}

/// `POST /api/progress/update` — add an increment, clamped to 100.
pub async fn update_progress(
    State(state): State<AppState>,
    Json(body): Json<UpdateBody>,
) -> Json<ProgressResponse> {
    let mut portal = state.portal.write().await;
    Json(ProgressResponse { progress: portal.advance_progress(body.increment) })
}
