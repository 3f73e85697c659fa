//! Persistence layer: PostgreSQL message store and audit log.
//!
//! Provides the [`MessageStore`] trait for durable storage of chat
//! messages and audit log entries. The concrete implementation uses
//! `sqlx::PgPool` for async PostgreSQL access.

pub mod models;
pub mod postgres;

use uuid::Uuid;

use crate::error::RelayError;
use models::{LogAction, MessageWithUser, NewMessage};

pub use postgres::PostgresStore;

/// Durable storage for messages and audit log entries.
///
/// The relay service is generic over this trait so store failures can
/// be exercised in tests without a database.
#[allow(async_fn_in_trait)]
pub trait MessageStore: Send + Sync {
    /// Persists a new message; the store assigns id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::StoreError`] on database failure.
    async fn create_message(&self, content: &str, user_id: Uuid) -> Result<NewMessage, RelayError>;

    /// Appends an entry to the audit log.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::StoreError`] on database failure.
    async fn append_log(
        &self,
        action: LogAction,
        user_id: Uuid,
        details: &str,
    ) -> Result<(), RelayError>;

    /// Returns the most recent messages joined with their users,
    /// ordered by timestamp descending, at most `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::StoreError`] on database failure.
    async fn recent_messages(&self, limit: i64) -> Result<Vec<MessageWithUser>, RelayError>;
}
