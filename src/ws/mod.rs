//! WebSocket layer: connection handling and event dispatch.
//!
//! The WebSocket endpoint at `/ws` carries the relay's real-time
//! traffic: inbound `join`/`send_message`/`disconnect` events and
//! outbound `receive_message` broadcasts.

pub mod connection;
pub mod handler;
