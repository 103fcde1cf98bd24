//! Fallback persistence engine.
//!
//! Implements, against local storage, the same mutation algorithms the
//! portal API performs remotely. Every operation re-reads the latest
//! snapshot, applies its change, and writes the full snapshot back —
//! there are no partial writes. Concurrent writers (another tab on the
//! same store) are last-write-wins.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

use super::{KeyValue, PROGRESS_KEY, REPUTATION_KEY, RESOURCES_KEY};
use crate::net::types::{Reputation, Resource, ResourceDraft, ResourceKind};

/// Author attached to resources created while offline.
pub const LOCAL_AUTHOR: &str = "You (Local)";

/// The built-in resource seed list, returned when the store holds no
/// snapshot yet.
#[must_use]
pub fn seed_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: 1,
            title: "Mastering C Pointers - Visual Guide".to_owned(),
            kind: ResourceKind::Video,
            likes: 124,
            author: "CodeWithTahir".to_owned(),
            url: "https://youtube.com/watch?v=zuegQmMdy8M".to_owned(),
            tags: vec!["C".to_owned(), "Pointers".to_owned()],
        },
        Resource {
            id: 2,
            title: "Flexbox vs Grid: Comprehensive Cheatsheet".to_owned(),
            kind: ResourceKind::Article,
            likes: 89,
            author: "Sara_Dev".to_owned(),
            url: "https://css-tricks.com/snippets/css/a-guide-to-flexbox/".to_owned(),
            tags: vec!["CSS".to_owned(), "Frontend".to_owned()],
        },
        Resource {
            id: 3,
            title: "Understanding JS Event Loop in 5 minutes".to_owned(),
            kind: ResourceKind::Video,
            likes: 210,
            author: "JSNinja".to_owned(),
            url: "https://www.youtube.com/watch?v=8aGhZQkoFbQ".to_owned(),
            tags: vec!["JavaScript".to_owned()],
        },
    ]
}

/// Seed reputation: the portal's historical average before any local
/// submissions.
#[must_use]
pub fn seed_reputation() -> Reputation {
    Reputation { avg: 4.88, count: 48 }
}

// =============================================================================
// RESOURCES
// =============================================================================

/// Read the persisted resource list, or the seed list when no snapshot
/// (or an unreadable one) exists.
#[must_use]
pub fn fetch_resources(store: &impl KeyValue) -> Vec<Resource> {
    store
        .get(RESOURCES_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_else(seed_resources)
}

/// Materialize a draft locally: timestamp id, zero likes, local author,
/// prepended to the snapshot.
pub fn create_resource(store: &impl KeyValue, draft: ResourceDraft, now_ms: i64) -> Resource {
    let created = Resource {
        id: now_ms,
        title: draft.title,
        kind: draft.kind,
        likes: 0,
        author: LOCAL_AUTHOR.to_owned(),
        url: draft.url,
        tags: draft.tags,
    };

    let mut resources = fetch_resources(store);
    resources.insert(0, created.clone());
    persist_resources(store, &resources);
    created
}

/// Increment the like count of the resource with `id` by exactly 1.
/// Returns the new count, or 0 when no such resource exists (nothing is
/// mutated in that case).
pub fn like_resource(store: &impl KeyValue, id: i64) -> i64 {
    let mut resources = fetch_resources(store);
    let mut new_likes = 0;
    if let Some(resource) = resources.iter_mut().find(|r| r.id == id) {
        resource.likes += 1;
        new_likes = resource.likes;
    }
    persist_resources(store, &resources);
    new_likes
}

fn persist_resources(store: &impl KeyValue, resources: &[Resource]) {
    if let Ok(raw) = serde_json::to_string(resources) {
        store.set(RESOURCES_KEY, &raw);
    }
}

// =============================================================================
// REPUTATION
// =============================================================================

/// Read the persisted reputation, or the seed when no snapshot exists.
#[must_use]
pub fn fetch_reputation(store: &impl KeyValue) -> Reputation {
    store
        .get(REPUTATION_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_else(seed_reputation)
}

/// Fold a submitted score into the running mean:
/// `avg' = round((avg * count + score) / (count + 1), 2)`, `count' = count + 1`.
pub fn rate_review(store: &impl KeyValue, score: f64) -> Reputation {
    let current = fetch_reputation(store);
    let count = current.count + 1;
    #[allow(clippy::cast_precision_loss)]
    let avg = round2((current.avg * current.count as f64 + score) / count as f64);
    let updated = Reputation { avg, count };
    if let Ok(raw) = serde_json::to_string(&updated) {
        store.set(REPUTATION_KEY, &raw);
    }
    updated
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// PROGRESS
// =============================================================================

/// Read the persisted progress percentage, 0 when no snapshot exists.
#[must_use]
pub fn fetch_progress(store: &impl KeyValue) -> i64 {
    store
        .get(PROGRESS_KEY)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}

/// Add `delta` to the stored progress, clamped to 100.
pub fn increment_progress(store: &impl KeyValue, delta: i64) -> i64 {
    let updated = (fetch_progress(store) + delta).min(100);
    store.set(PROGRESS_KEY, &updated.to_string());
    updated
}
