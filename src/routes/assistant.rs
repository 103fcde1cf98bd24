//! Help-chat assistant route.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::llm::types::Message;
use crate::services::assistant::{self, AssistantError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AskBody {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub reply: String,
}

/// `POST /api/assistant` — send the visible conversation, get a reply.
pub async fn ask(
    State(state): State<AppState>,
    Json(body): Json<AskBody>,
) -> Result<Json<AskResponse>, StatusCode> {
    let reply = assistant::respond(&state, &body.messages)
        .await
        .map_err(assistant_error_to_status)?;
    Ok(Json(AskResponse { reply }))
}

pub(crate) fn assistant_error_to_status(err: AssistantError) -> StatusCode {
    match err {
        AssistantError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        AssistantError::EmptyConversation => StatusCode::BAD_REQUEST,
        AssistantError::Llm(_) => StatusCode::BAD_GATEWAY,
    }
}
