//! Persistence gateway for the portal API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, degrading to
//! the local fallback store on any transport error or non-success
//! status. Server-side (SSR): the remote path is stubbed out, so every
//! operation resolves from the (inert) fallback store's seed data.
//!
//! ERROR HANDLING
//! ==============
//! Data operations never surface errors: callers always receive data —
//! remote, locally persisted, or seed. The assistant call is the one
//! exception; its failure is reported so the chat panel can show an
//! explicit error message.

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use crate::net::types::{AssistantReply, LikeResponse, ProgressSnapshot, ProgressUpdate, RateSubmission};
use crate::net::types::{AssistantTurn, Reputation, Resource, ResourceDraft};
use crate::store::{BrowserStore, fallback};

/// Current wall-clock time in milliseconds, the fallback id source.
#[allow(clippy::cast_possible_truncation)]
fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

// =============================================================================
// RESOURCES
// =============================================================================

/// Fetch the resource library. Falls back to the local snapshot, or the
/// built-in seed list when none exists.
pub async fn fetch_resources() -> Vec<Resource> {
    if let Some(list) = remote_fetch_resources().await {
        return list;
    }
    fallback::fetch_resources(&BrowserStore)
}

async fn remote_fetch_resources() -> Option<Vec<Resource>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/resources")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Resource>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Share a new resource. The fallback path assigns a timestamp id and
/// prepends to the local snapshot.
pub async fn create_resource(draft: ResourceDraft) -> Resource {
    if let Some(created) = remote_create_resource(&draft).await {
        return created;
    }
    fallback::create_resource(&BrowserStore, draft, now_ms())
}

async fn remote_create_resource(draft: &ResourceDraft) -> Option<Resource> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/resources")
            .json(draft)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Resource>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        None
    }
}

/// Like a resource, returning its new like count (0 if the id is
/// unknown on the path that handled the call).
pub async fn like_resource(id: i64) -> i64 {
    if let Some(likes) = remote_like_resource(id).await {
        return likes;
    }
    fallback::like_resource(&BrowserStore, id)
}

async fn remote_like_resource(id: i64) -> Option<i64> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/resources/{id}/like");
        let resp = gloo_net::http::Request::post(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<LikeResponse>().await.ok().map(|r| r.likes)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

// =============================================================================
// REPUTATION
// =============================================================================

/// Fetch the peer-review reputation aggregate.
pub async fn fetch_reputation() -> Reputation {
    if let Some(rep) = remote_fetch_reputation().await {
        return rep;
    }
    fallback::fetch_reputation(&BrowserStore)
}

async fn remote_fetch_reputation() -> Option<Reputation> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/reputation")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Reputation>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Submit a review score and get the updated aggregate back.
pub async fn rate_review(score: f64) -> Reputation {
    if let Some(rep) = remote_rate_review(score).await {
        return rep;
    }
    fallback::rate_review(&BrowserStore, score)
}

async fn remote_rate_review(score: f64) -> Option<Reputation> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/reputation/rate")
            .json(&RateSubmission { score })
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Reputation>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = score;
        None
    }
}

// =============================================================================
// PROGRESS
// =============================================================================

/// Fetch the current project progress percentage.
pub async fn fetch_progress() -> i64 {
    if let Some(progress) = remote_fetch_progress().await {
        return progress;
    }
    fallback::fetch_progress(&BrowserStore)
}

async fn remote_fetch_progress() -> Option<i64> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/progress")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ProgressSnapshot>().await.ok().map(|p| p.progress)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Add an increment to the project progress, clamped to 100.
pub async fn increment_progress(delta: i64) -> i64 {
    if let Some(progress) = remote_increment_progress(delta).await {
        return progress;
    }
    fallback::increment_progress(&BrowserStore, delta)
}

async fn remote_increment_progress(delta: i64) -> Option<i64> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/progress/update")
            .json(&ProgressUpdate { increment: delta })
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ProgressSnapshot>().await.ok().map(|p| p.progress)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delta;
        None
    }
}

// =============================================================================
// ASSISTANT
// =============================================================================

/// Ask the help-chat assistant. Unlike the data operations this has no
/// local fallback; the error is surfaced so the panel can display it.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn ask_assistant(turns: &[AssistantTurn]) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "messages": turns });
        let resp = gloo_net::http::Request::post("/api/assistant")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("assistant request failed: {}", resp.status()));
        }
        let reply: AssistantReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(reply.reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = turns;
        Err("not available on server".to_owned())
    }
}
