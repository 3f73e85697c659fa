//! Relay service: interprets chat events, persists, and fans out.
//!
//! Each event is handled statelessly; the only persistent state is in
//! the store. Persistence always precedes broadcast: a message that
//! failed to persist is never delivered to any peer.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::chat_event::{BroadcastMessage, ServerEvent, UserRef};
use crate::domain::hub::Hub;
use crate::error::RelayError;
use crate::persistence::MessageStore;
use crate::persistence::models::{LogAction, MessageWithUser};

/// Maximum number of messages returned by the history query.
pub const RECENT_MESSAGE_LIMIT: i64 = 50;

/// Business rules for the three chat operations: join, send, history.
///
/// Generic over the store so failure paths are testable without a
/// database. Holds the [`Hub`] for fan-out; never touches its
/// connection set directly.
#[derive(Debug, Clone)]
pub struct RelayService<S> {
    store: S,
    hub: Arc<Hub>,
}

impl<S: MessageStore> RelayService<S> {
    /// Creates a new `RelayService`.
    #[must_use]
    pub fn new(store: S, hub: Arc<Hub>) -> Self {
        Self { store, hub }
    }

    /// Returns a reference to the inner [`Hub`].
    #[must_use]
    pub fn hub(&self) -> &Arc<Hub> {
        &self.hub
    }

    /// Handles a `join` event: journals the join to the audit log.
    ///
    /// Nothing is broadcast and nothing is returned to the client. A
    /// failed log write is traced and otherwise ignored; the connection
    /// is kept and the event is not retried.
    pub async fn handle_join(&self, user_id: Uuid, user_name: &str) {
        tracing::info!(%user_id, user_name, "user joined");

        let details = format!("{user_name} joined the chat.");
        if let Err(err) = self.store.append_log(LogAction::Join, user_id, &details).await {
            tracing::warn!(%user_id, %err, "failed to journal join");
        }
    }

    /// Handles a `send_message` event.
    ///
    /// In order: persist the message (store assigns id and timestamp),
    /// broadcast `receive_message` to every connection including the
    /// sender, then journal the send to the audit log.
    ///
    /// If the persist fails the sequence aborts: no broadcast, no log
    /// entry, and the sender gets no error reply (fire-and-forget). A
    /// log-write failure after a successful persist is traced and
    /// swallowed; the message is already durable and delivered.
    pub async fn handle_send_message(&self, content: String, user_id: Uuid, user_name: &str) {
        let message = match self.store.create_message(&content, user_id).await {
            Ok(message) => message,
            Err(err) => {
                tracing::error!(%user_id, %err, "failed to persist message");
                return;
            }
        };

        let delivered = self
            .hub
            .broadcast(&ServerEvent::ReceiveMessage(BroadcastMessage {
                id: message.id,
                content,
                timestamp: message.timestamp,
                user: UserRef {
                    name: user_name.to_string(),
                },
            }))
            .await;
        tracing::debug!(message_id = message.id, delivered, "message broadcast");

        let details = format!("{user_name} sent a message.");
        if let Err(err) = self
            .store
            .append_log(LogAction::SendMessage, user_id, &details)
            .await
        {
            tracing::error!(%user_id, message_id = message.id, %err, "failed to journal send");
        }
    }

    /// Returns the most recent messages, newest first, at most
    /// [`RECENT_MESSAGE_LIMIT`].
    ///
    /// Read-only; an empty history is an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::StoreError`] on database failure.
    pub async fn recent_messages(&self) -> Result<Vec<MessageWithUser>, RelayError> {
        self.store.recent_messages(RECENT_MESSAGE_LIMIT).await
    }
}
