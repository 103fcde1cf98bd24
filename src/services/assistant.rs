//! Help-chat assistant service — conversation history → LLM → reply text.
//!
//! DESIGN
//! ======
//! The client sends its full visible conversation; the service sanitizes
//! it (known roles only, no blank messages), sends it to the configured
//! LLM with the mentor system prompt, and returns the reply text.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use std::sync::OnceLock;

use tracing::info;
use uuid::Uuid;

use crate::llm::types::{LlmError, Message};
use crate::state::AppState;

/// System prompt for the mentor persona. Answers guide rather than solve.
const SYSTEM_PROMPT: &str = "You are a senior technical mentor at a peer-learning software school. \
    You help students with C, Python, JavaScript, and DevOps. Keep answers concise, encouraging, \
    and focused on peer-learning principles. Do not give the full code immediately; guide the \
    student toward the solution.";

const DEFAULT_ASSISTANT_MAX_TOKENS: u32 = 1024;

fn assistant_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| {
        std::env::var("ASSISTANT_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_ASSISTANT_MAX_TOKENS)
    })
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("LLM not configured")]
    NotConfigured,
    #[error("conversation has no user message")]
    EmptyConversation,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

// =============================================================================
// SERVICE
// =============================================================================

/// Drop messages with unknown roles or blank content. The provider APIs
/// reject both.
#[must_use]
pub fn sanitize_history(messages: &[Message]) -> Vec<Message> {
    messages
        .iter()
        .filter(|m| matches!(m.role.as_str(), "user" | "assistant"))
        .filter(|m| !m.content.trim().is_empty())
        .cloned()
        .collect()
}

/// Send the conversation to the LLM and return the reply text.
///
/// # Errors
///
/// - [`AssistantError::NotConfigured`] when no LLM client is available.
/// - [`AssistantError::EmptyConversation`] when sanitation leaves no
///   user message to respond to.
/// - [`AssistantError::Llm`] when the provider call fails.
pub async fn respond(state: &AppState, messages: &[Message]) -> Result<String, AssistantError> {
    let llm = state.llm.as_ref().ok_or(AssistantError::NotConfigured)?;

    let history = sanitize_history(messages);
    if !history.iter().any(|m| m.role == "user") {
        return Err(AssistantError::EmptyConversation);
    }

    let exchange_id = Uuid::new_v4();
    let response = llm.chat(assistant_max_tokens(), SYSTEM_PROMPT, &history).await?;
    info!(
        %exchange_id,
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "assistant exchange"
    );

    Ok(response.text)
}
