//! Database models for messages and audit log entries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned fields of a freshly inserted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMessage {
    /// Auto-increment row ID.
    pub id: i64,
    /// Server-side creation timestamp.
    pub timestamp: DateTime<Utc>,
}

/// A message row joined with its owning user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageWithUser {
    /// Auto-increment row ID.
    pub id: i64,
    /// Message body.
    pub content: String,
    /// Creation timestamp; the history sort key.
    pub timestamp: DateTime<Utc>,
    /// Owning user's id.
    pub user_id: Uuid,
    /// Owning user's display name from the `users` table.
    pub user_name: String,
}

/// Audit log action discriminator.
///
/// Stored as text in the `logs` table; the closed set of actions this
/// core journals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogAction {
    /// A user joined the chat.
    Join,
    /// A user sent a message.
    SendMessage,
}

impl LogAction {
    /// Returns the stored text form of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::SendMessage => "send_message",
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
