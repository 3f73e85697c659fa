//! WebSocket connection loop.
//!
//! Handles the read/write loop for a single WebSocket connection:
//! registers an outbound frame channel with the hub, dispatches
//! inbound events through an exhaustive match, and unregisters on
//! transport close.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::app_state::Relay;
use crate::domain::chat_event::{ClientEvent, ServerEvent};
use crate::domain::connection_id::ConnectionId;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Reads events from the client and dispatches them to the relay.
/// - Forwards broadcast frames from the hub's per-connection channel
///   to the client.
///
/// The connection is registered with the hub before the first frame is
/// read and unregistered when the loop exits, whichever way it exits.
pub async fn run_connection(socket: WebSocket, relay: Arc<Relay>) {
    let conn_id = ConnectionId::new();
    let (frame_tx, mut frame_rx) = mpsc::unbounded_channel();
    relay.hub().register(conn_id, frame_tx).await;
    tracing::info!(%conn_id, "ws connection opened");

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Incoming event from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match parse_client_event(&text) {
                            Ok(ClientEvent::Join { user_id, user_name }) => {
                                relay.handle_join(user_id, &user_name).await;
                            }
                            Ok(ClientEvent::SendMessage { content, user_id, user_name }) => {
                                relay.handle_send_message(content, user_id, &user_name).await;
                            }
                            Ok(ClientEvent::Disconnect) => break,
                            Err(reply) => {
                                let json = serde_json::to_string(&reply).unwrap_or_default();
                                if ws_tx.send(Message::text(json)).await.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
            // Broadcast frame from the hub
            frame = frame_rx.recv() => {
                match frame {
                    Some(event) => {
                        let json = serde_json::to_string(&event).unwrap_or_default();
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    relay.hub().unregister(conn_id).await;
    tracing::info!(%conn_id, "ws connection closed");
}

/// Parses an inbound text frame, returning an error reply frame when
/// the event is malformed or unknown.
fn parse_client_event(text: &str) -> Result<ClientEvent, ServerEvent> {
    serde_json::from_str::<ClientEvent>(text).map_err(|_| ServerEvent::Error {
        code: 400,
        message: "malformed event".to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_send_message() {
        let text = r#"{
            "event": "send_message",
            "data": {
                "content": "hi",
                "userId": "b4c361ea-5b9a-4ab9-8fd5-5f5f2b2a3a10",
                "userName": "Alice"
            }
        }"#;
        let Ok(ClientEvent::SendMessage { user_name, .. }) = parse_client_event(text) else {
            panic!("expected send_message");
        };
        assert_eq!(user_name, "Alice");
    }

    #[test]
    fn malformed_frame_yields_error_reply() {
        let Err(ServerEvent::Error { code, .. }) = parse_client_event("not json") else {
            panic!("expected error reply");
        };
        assert_eq!(code, 400);
    }

    #[test]
    fn unknown_event_yields_error_reply() {
        let result = parse_client_event(r#"{"event": "typing", "data": {}}"#);
        assert!(result.is_err());
    }
}
