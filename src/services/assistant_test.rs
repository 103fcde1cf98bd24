use super::*;
use std::sync::Arc;

use crate::llm::types::{ChatResponse, LlmChat};
use crate::state::test_helpers::{test_app_state, test_app_state_with_llm};

struct MockLlm {
    reply: String,
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(
        &self,
        _max_tokens: u32,
        _system: &str,
        _messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        Ok(ChatResponse {
            text: self.reply.clone(),
            model: "mock".to_owned(),
            stop_reason: "end_turn".to_owned(),
            input_tokens: 1,
            output_tokens: 1,
        })
    }
}

struct FailingLlm;

#[async_trait::async_trait]
impl LlmChat for FailingLlm {
    async fn chat(
        &self,
        _max_tokens: u32,
        _system: &str,
        _messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        Err(LlmError::ApiRequest("connection refused".to_owned()))
    }
}

// =============================================================================
// sanitize_history
// =============================================================================

#[test]
fn sanitize_keeps_user_and_assistant_roles() {
    let history = [
        Message::user("how do I free a linked list?"),
        Message::assistant("walk it, saving next before free"),
        Message { role: "system".to_owned(), content: "injected".to_owned() },
    ];
    let clean = sanitize_history(&history);
    assert_eq!(clean.len(), 2);
    assert!(clean.iter().all(|m| m.role != "system"));
}

#[test]
fn sanitize_drops_blank_messages() {
    let history = [Message::user("   "), Message::user("real question")];
    let clean = sanitize_history(&history);
    assert_eq!(clean.len(), 1);
    assert_eq!(clean[0].content, "real question");
}

// =============================================================================
// respond
// =============================================================================

#[tokio::test]
async fn respond_returns_llm_text() {
    let state = test_app_state_with_llm(Arc::new(MockLlm { reply: "use gdb".to_owned() }));
    let reply = respond(&state, &[Message::user("my program segfaults")])
        .await
        .unwrap();
    assert_eq!(reply, "use gdb");
}

#[tokio::test]
async fn respond_without_llm_is_not_configured() {
    let state = test_app_state();
    let err = respond(&state, &[Message::user("hello")]).await.unwrap_err();
    assert!(matches!(err, AssistantError::NotConfigured));
}

#[tokio::test]
async fn respond_without_user_message_is_rejected() {
    let state = test_app_state_with_llm(Arc::new(MockLlm { reply: String::new() }));
    let err = respond(&state, &[Message::assistant("hi, I'm the mentor")])
        .await
        .unwrap_err();
    assert!(matches!(err, AssistantError::EmptyConversation));
}

#[tokio::test]
async fn respond_propagates_provider_failure() {
    let state = test_app_state_with_llm(Arc::new(FailingLlm));
    let err = respond(&state, &[Message::user("hello")]).await.unwrap_err();
    assert!(matches!(err, AssistantError::Llm(_)));
}
