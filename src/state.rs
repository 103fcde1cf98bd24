//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the in-memory portal store and the optional LLM client. The
//! store lives behind a `tokio::sync::RwLock`; handlers take the write
//! lock for mutations and a read lock for queries.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::llm::LlmChat;

/// Author string attached to resources created through the API.
pub const LOCAL_AUTHOR: &str = "You (Student)";

// =============================================================================
// ENTITIES
// =============================================================================

/// Category of a shared learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Article,
    Documentation,
}

/// A community-shared learning resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub likes: i64,
    pub author: String,
    pub url: String,
    pub tags: Vec<String>,
}

/// Draft submitted when sharing a new resource. The server assigns
/// `id`, `likes` and `author`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
    pub tags: Vec<String>,
}

/// Aggregate peer-review reputation: running mean + submission count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    pub avg: f64,
    pub count: i64,
}

// =============================================================================
// PORTAL STORE
// =============================================================================

/// In-memory portal data. Seeded at startup, mutated in place.
#[derive(Debug, Clone)]
pub struct PortalStore {
    pub resources: Vec<Resource>,
    pub reputation: Reputation,
    pub progress: i64,
}

impl PortalStore {
    /// Store seeded with the built-in defaults.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            resources: seed_resources(),
            reputation: Reputation { avg: 4.88, count: 48 },
            progress: 0,
        }
    }

    /// Resources sorted by like count, most liked first.
    #[must_use]
    pub fn resources_by_likes(&self) -> Vec<Resource> {
        let mut out = self.resources.clone();
        out.sort_by(|a, b| b.likes.cmp(&a.likes));
        out
    }

    /// Materialize a draft into a stored resource with the given id.
    pub fn create_resource(&mut self, draft: ResourceDraft, id: i64) -> Resource {
        let resource = Resource {
            id,
            title: draft.title,
            kind: draft.kind,
            likes: 0,
            author: LOCAL_AUTHOR.to_owned(),
            url: draft.url,
            tags: draft.tags,
        };
        self.resources.push(resource.clone());
        resource
    }

    /// Increment the like count of the resource with `id` by exactly 1.
    /// Returns the new count, or `None` when no such resource exists.
    pub fn like_resource(&mut self, id: i64) -> Option<i64> {
        let resource = self.resources.iter_mut().find(|r| r.id == id)?;
        resource.likes += 1;
        Some(resource.likes)
    }

    /// Fold a submitted score into the reputation running mean.
    ///
    /// `avg' = round((avg * count + score) / (count + 1), 2)`, count + 1.
    pub fn rate(&mut self, score: f64) -> Reputation {
        let current = self.reputation;
        let count = current.count + 1;
        #[allow(clippy::cast_precision_loss)]
        let avg = round2((current.avg * current.count as f64 + score) / count as f64);
        self.reputation = Reputation { avg, count };
        self.reputation
    }

    /// Add `increment` to the project progress, clamped to 100.
    pub fn advance_progress(&mut self, increment: i64) -> i64 {
        self.progress = (self.progress + increment).min(100);
        self.progress
    }
}

impl Default for PortalStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The built-in resource seed list.
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

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub portal: Arc<RwLock<PortalStore>>,
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { portal: Arc::new(RwLock::new(PortalStore::seeded())), llm }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
