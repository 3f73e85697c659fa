//! PostgreSQL implementation of the message store.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::MessageStore;
use super::models::{LogAction, MessageWithUser, NewMessage};
use crate::error::RelayError;

/// PostgreSQL-backed message store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MessageStore for PostgresStore {
    async fn create_message(&self, content: &str, user_id: Uuid) -> Result<NewMessage, RelayError> {
        let (id, timestamp) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            "INSERT INTO messages (content, user_id) VALUES ($1, $2) RETURNING id, timestamp",
        )
        .bind(content)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RelayError::StoreError(e.to_string()))?;

        Ok(NewMessage { id, timestamp })
    }

    async fn append_log(
        &self,
        action: LogAction,
        user_id: Uuid,
        details: &str,
    ) -> Result<(), RelayError> {
        sqlx::query("INSERT INTO logs (action, user_id, details) VALUES ($1, $2, $3)")
            .bind(action.as_str())
            .bind(user_id)
            .bind(details)
            .execute(&self.pool)
            .await
            .map_err(|e| RelayError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn recent_messages(&self, limit: i64) -> Result<Vec<MessageWithUser>, RelayError> {
        let rows = sqlx::query_as::<_, (i64, String, DateTime<Utc>, Uuid, String)>(
            "SELECT m.id, m.content, m.timestamp, m.user_id, u.name \
             FROM messages m JOIN users u ON u.id = m.user_id \
             ORDER BY m.timestamp DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RelayError::StoreError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, content, timestamp, user_id, user_name)| MessageWithUser {
                id,
                content,
                timestamp,
                user_id,
                user_name,
            })
            .collect())
    }
}
