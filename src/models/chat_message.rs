//! Chat Message Model
//!
//! A single entry in the study-assistant transcript. The transcript is
//! an append-only ordered sequence owned by the chat panel for the
//! lifetime of the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The learner
    User,
    /// The study assistant
    Assistant,
}

/// One message in the assistant transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier for the message
    pub id: String,

    /// Who authored the message
    pub role: ChatRole,

    /// Message text (plain text, no markup)
    pub text: String,

    /// When the message was appended
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message from the learner
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Create a message from the assistant
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }

    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Check whether the message came from the learner
    pub fn is_user(&self) -> bool {
        matches!(self.role, ChatRole::User)
    }
}
