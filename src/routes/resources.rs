//! Community resource library routes.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::state::{AppState, Resource, ResourceDraft};

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub likes: i64,
}

/// `GET /api/resources` — all resources, most liked first.
pub async fn list_resources(State(state): State<AppState>) -> Json<Vec<Resource>> {
    let portal = state.portal.read().await;
    Json(portal.resources_by_likes())
}

/// `POST /api/resources` — share a new resource.
pub async fn create_resource(
    State(state): State<AppState>,
    Json(draft): Json<ResourceDraft>,
) -> Json<Resource> {
    let id = time::OffsetDateTime::now_utc().unix_timestamp();
    let mut portal = state.portal.write().await;
    Json(portal.create_resource(draft, id))
}

/// `POST /api/resources/{id}/like` — increment a resource's like count.
pub async fn like_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LikeResponse>, StatusCode> {
    let mut portal = state.portal.write().await;
    let likes = portal.like_resource(id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(LikeResponse { likes }))
}
