use super::*;
use crate::llm::types::LlmError;

#[test]
fn not_configured_maps_to_503() {
    assert_eq!(
        assistant_error_to_status(AssistantError::NotConfigured),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[test]
fn empty_conversation_maps_to_400() {
    assert_eq!(
        assistant_error_to_status(AssistantError::EmptyConversation),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn llm_failure_maps_to_502() {
    let err = AssistantError::Llm(LlmError::ApiRequest("boom".to_owned()));
    assert_eq!(assistant_error_to_status(err), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn ask_without_llm_returns_503() {
    let state = crate::state::test_helpers::test_app_state();
    let body = AskBody { messages: vec![Message::user("help")] };
    let err = ask(State(state), Json(body)).await.unwrap_err();
    assert_eq!(err, StatusCode::SERVICE_UNAVAILABLE);
}
