//! Domain layer: connection identity, chat events, and the broadcast hub.
//!
//! This module contains the server-side domain model: the opaque
//! per-connection identifier, the closed set of inbound and outbound
//! chat events, and the hub that tracks active connections and fans
//! events out to all of them.

pub mod chat_event;
pub mod connection_id;
pub mod hub;

pub use chat_event::{BroadcastMessage, ClientEvent, ServerEvent, UserRef};
pub use connection_id::ConnectionId;
pub use hub::Hub;
