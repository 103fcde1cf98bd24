//! Peer-review reputation routes.

#[cfg(test)]
#[path = "reputation_test.rs"]
mod reputation_test;

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;

use crate::state::{AppState, Reputation};

#[derive(Deserialize)]
pub struct RateBody {
    pub score: f64,
}

/// `GET /api/reputation` — current running mean and submission count.
pub async fn get_reputation(State(state): State<AppState>) -> Json<Reputation> {
    let portal = state.portal.read().await;
    Json(portal.reputation)
}

/// `POST /api/reputation/rate` — fold a new score into the mean.
pub async fn rate(State(state): State<AppState>, Json(body): Json<RateBody>) -> Json<Reputation> {
    let mut portal = state.portal.write().await;
    Json(portal.rate(body.score))
}
