//! Wire types shared with the portal API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Category of a shared learning resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Video,
    Article,
    Documentation,
}

impl ResourceKind {
    /// Label shown in the share-resource form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "YouTube Video",
            Self::Article => "Article/Blog",
            Self::Documentation => "Official Docs",
        }
    }

    /// Wire name, also used as a form `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Article => "article",
            Self::Documentation => "documentation",
        }
    }

    /// Parse a form `<option>` value. Unknown values fall back to video.
    #[must_use]
    pub fn from_form(value: &str) -> Self {
        match value {
            "article" => Self::Article,
            "documentation" => Self::Documentation,
            _ => Self::Video,
        }
    }
}

/// A community-shared learning resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
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

/// Draft for sharing a new resource. The authority (server or fallback
/// store) assigns `id`, `likes` and `author`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
    pub tags: Vec<String>,
}

/// Aggregate peer-review reputation: running mean + submission count.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    pub avg: f64,
    pub count: i64,
}

/// `POST /api/resources/{id}/like` response.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct LikeResponse {
    pub likes: i64,
}

/// `GET /api/progress` and `POST /api/progress/update` response.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub progress: i64,
}

/// `POST /api/progress/update` request body.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ProgressUpdate {
    pub increment: i64,
}

/// `POST /api/reputation/rate` request body.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RateSubmission {
    pub score: f64,
}

/// One message of the assistant conversation, as sent to the server.
#[derive(Clone, Debug, Serialize)]
pub struct AssistantTurn {
    pub role: String,
    pub content: String,
}

/// `POST /api/assistant` response.
#[derive(Clone, Debug, Deserialize)]
pub struct AssistantReply {
    pub reply: String,
}
