//! DTOs for the message history endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::persistence::models::MessageWithUser;

/// A message joined with its owning user, as returned by `GET /messages`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Store-assigned message id.
    pub id: i64,
    /// Message body.
    pub content: String,
    /// Store-assigned creation time; the history sort key.
    pub timestamp: DateTime<Utc>,
    /// Owning user's identity.
    pub user: UserDto,
}

/// User identity embedded in history responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    /// User id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
}

impl From<MessageWithUser> for MessageDto {
    fn from(row: MessageWithUser) -> Self {
        Self {
            id: row.id,
            content: row.content,
            timestamp: row.timestamp,
            user: UserDto {
                id: row.user_id,
                name: row.user_name,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn dto_nests_user_identity() {
        let row = MessageWithUser {
            id: 7,
            content: "hi".to_string(),
            timestamp: Utc::now(),
            user_id: Uuid::new_v4(),
            user_name: "Alice".to_string(),
        };
        let user_id = row.user_id;
        let dto = MessageDto::from(row);
        assert_eq!(dto.id, 7);
        assert_eq!(dto.user.id, user_id);
        assert_eq!(dto.user.name, "Alice");

        let json = serde_json::to_value(&dto).unwrap_or_default();
        let name = json
            .get("user")
            .and_then(|u| u.get("name"))
            .and_then(|n| n.as_str());
        assert_eq!(name, Some("Alice"));
    }
}
