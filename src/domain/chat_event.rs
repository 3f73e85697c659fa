//! Chat wire events: the closed inbound and outbound event sets.
//!
//! Inbound events arrive as `{"event": "...", "data": {...}}` frames and
//! deserialize into [`ClientEvent`], a closed tagged enum dispatched
//! through an exhaustive match. Outbound frames are [`ServerEvent`]s
//! serialized with the same envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events a client can send over WebSocket.
///
/// Payload field names follow the wire protocol (`userId`, `userName`).
/// The display name and user id are supplied by the client on each
/// event; they are not bound to the connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    /// A user announces presence in the chat.
    Join {
        /// Acting user's id (assumed to pre-exist in the store).
        user_id: Uuid,
        /// Display name used in the audit log entry.
        user_name: String,
    },
    /// A user sends a chat message to all connected peers.
    SendMessage {
        /// Message body. Not validated for emptiness or length.
        content: String,
        /// Acting user's id.
        user_id: Uuid,
        /// Display name echoed in the broadcast payload.
        user_name: String,
    },
    /// The client is leaving; the connection will be unregistered.
    Disconnect,
}

/// Events the server sends to clients over WebSocket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A chat message broadcast to every connected peer.
    ReceiveMessage(BroadcastMessage),
    /// A per-connection error reply (malformed frame, unknown event).
    Error {
        /// Numeric error code.
        code: u32,
        /// Human-readable error message.
        message: String,
    },
}

/// Payload of a `receive_message` broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastMessage {
    /// Store-assigned message id.
    pub id: i64,
    /// Message body as sent.
    pub content: String,
    /// Store-assigned creation time.
    pub timestamp: DateTime<Utc>,
    /// Sender identity as supplied on the triggering event.
    pub user: UserRef,
}

/// Minimal user identity carried in broadcast payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Display name.
    pub name: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn join_deserializes_from_camel_case_payload() {
        let json = r#"{
            "event": "join",
            "data": {
                "userId": "b4c361ea-5b9a-4ab9-8fd5-5f5f2b2a3a10",
                "userName": "Alice"
            }
        }"#;
        let event: Result<ClientEvent, _> = serde_json::from_str(json);
        let Ok(ClientEvent::Join { user_name, .. }) = event else {
            panic!("expected join event");
        };
        assert_eq!(user_name, "Alice");
    }

    #[test]
    fn send_message_deserializes_with_content() {
        let json = r#"{
            "event": "send_message",
            "data": {
                "content": "hi",
                "userId": "b4c361ea-5b9a-4ab9-8fd5-5f5f2b2a3a10",
                "userName": "Alice"
            }
        }"#;
        let event: Result<ClientEvent, _> = serde_json::from_str(json);
        let Ok(ClientEvent::SendMessage { content, .. }) = event else {
            panic!("expected send_message event");
        };
        assert_eq!(content, "hi");
    }

    #[test]
    fn disconnect_deserializes_without_data() {
        let event: Result<ClientEvent, _> = serde_json::from_str(r#"{"event": "disconnect"}"#);
        assert_eq!(event.ok(), Some(ClientEvent::Disconnect));
    }

    #[test]
    fn unknown_event_is_rejected() {
        let event: Result<ClientEvent, _> =
            serde_json::from_str(r#"{"event": "shout", "data": {}}"#);
        assert!(event.is_err());
    }

    #[test]
    fn receive_message_serializes_with_envelope() {
        let frame = ServerEvent::ReceiveMessage(BroadcastMessage {
            id: 7,
            content: "hi".to_string(),
            timestamp: Utc::now(),
            user: UserRef {
                name: "Alice".to_string(),
            },
        });
        let json = serde_json::to_value(&frame).unwrap_or_default();
        assert_eq!(json.get("event").and_then(|v| v.as_str()), Some("receive_message"));
        let user_name = json
            .get("data")
            .and_then(|d| d.get("user"))
            .and_then(|u| u.get("name"))
            .and_then(|n| n.as_str());
        assert_eq!(user_name, Some("Alice"));
    }
}
