use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_closed_with_greeting() {
    let state = ChatState::default();
    assert!(!state.open);
    assert!(!state.loading);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, ChatRole::Assistant);
}

#[test]
fn chat_roles_map_to_wire_names() {
    assert_eq!(ChatRole::User.as_str(), "user");
    assert_eq!(ChatRole::Assistant.as_str(), "assistant");
}

#[test]
fn chat_messages_get_distinct_ids() {
    let a = ChatMessage::new(ChatRole::User, "one");
    let b = ChatMessage::new(ChatRole::User, "two");
    assert_ne!(a.id, b.id);
}
