//! Message history handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::MessageDto;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, RelayError};

/// `GET /messages` — The 50 most recent messages, newest first.
///
/// # Errors
///
/// Returns [`RelayError`] when the store is unavailable.
#[utoipa::path(
    get,
    path = "/messages",
    tag = "Messages",
    summary = "Fetch recent messages",
    description = "Returns the most recent 50 messages joined with their users, ordered by timestamp descending. An empty history yields an empty array.",
    responses(
        (status = 200, description = "Recent messages, newest first", body = Vec<MessageDto>),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RelayError> {
    let messages = state.relay.recent_messages().await?;
    let data: Vec<MessageDto> = messages.into_iter().map(MessageDto::from).collect();
    Ok(Json(data))
}

/// Message routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/messages", get(list_messages))
}
