use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Inference request failed: {0}")]
    Inference(String),

    #[error("Failed to parse request body: {0}")]
    Parse(String),

    #[error("Missing configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Parse(err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single entry in a conversation. Ordering within the enclosing
/// sequence is the conversation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// System prompt
// ─────────────────────────────────────────────────────────────────────────────

/// Instructions sent to the model when the caller supplies no system
/// message of their own. Opaque persona text; overridable at startup
/// via configuration.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a helpful, friendly assistant. Answer the user's questions \
clearly and concisely. Provide accurate information and admit when you \
do not know something rather than guessing. Keep responses focused on \
what was asked, use plain language, and format code or structured data \
in fenced blocks when it aids readability.";

/// Guarantees the sequence carries a system message before it is sent
/// upstream: if no entry has role `system`, the given prompt is inserted
/// at the front. A caller-supplied system message anywhere in the
/// sequence is left exactly where it is, with no merging or validation.
pub fn ensure_system_prompt(messages: &mut Vec<ChatMessage>, prompt: &str) {
    let has_system = messages.iter().any(|m| m.role == Role::System);
    if !has_system {
        messages.insert(0, ChatMessage::system(prompt));
    }
}
