//! # chat-relay
//!
//! Real-time WebSocket chat relay with persistent message history.
//!
//! Clients connect over WebSocket, announce presence with a `join` event,
//! and broadcast chat messages to every connected peer with `send_message`.
//! Every message is persisted to PostgreSQL before it is fanned out, and
//! every handled event is journaled to an append-only audit log. Recent
//! history is served over REST.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── RelayService (service/)
//!     ├── Hub (domain/)
//!     │
//!     └── PostgreSQL Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
pub mod ws;
