//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the `/api` surface consumed by the dashboard client, a health
//! probe, and static serving of the built client bundle. CORS is
//! permissive so the client can be served from a dev server on another
//! port during development.

pub mod assistant;
pub mod progress;
pub mod reputation;
pub mod resources;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes under `/api` plus the health probe.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/resources",
            get(resources::list_resources).post(resources::create_resource),
        )
        .route("/api/resources/{id}/like", post(resources::like_resource))
        .route("/api/reputation", get(reputation::get_reputation))
        .route("/api/reputation/rate", post(reputation::rate))
        .route("/api/progress", get(progress::get_progress))
        .route("/api/progress/update", post(progress::update_progress))
        .route("/api/assistant", post(assistant::ask))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolve the directory holding the built client bundle.
fn site_dir() -> PathBuf {
    std::env::var("SITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("client/dist"))
}

/// Full application router: API + static client assets.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes(state))
        .fallback_service(ServeDir::new(site_dir()))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
