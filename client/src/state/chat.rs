#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// State for the floating help-chat panel.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { open: false, messages: vec![ChatMessage::greeting()], loading: false }
    }
}

/// Message displayed when the assistant call fails.
pub const CHAT_ERROR_TEXT: &str = "Error connecting to the assistant. Please check your connection.";

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Wire role name sent to the assistant endpoint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single help-chat message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, text: text.into() }
    }

    /// The canned greeting every conversation starts with.
    #[must_use]
    pub fn greeting() -> Self {
        Self::new(
            ChatRole::Assistant,
            "Hi! I am your mentor assistant. How can I help you with your projects today?",
        )
    }
}
