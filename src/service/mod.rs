//! Service layer: business rules for chat events and history.

pub mod relay_service;

pub use relay_service::{RECENT_MESSAGE_LIMIT, RelayService};
