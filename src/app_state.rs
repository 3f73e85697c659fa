//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::PostgresStore;
use crate::service::RelayService;

/// The concrete relay service wired to PostgreSQL.
pub type Relay = RelayService<PostgresStore>;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Relay service for all business logic.
    pub relay: Arc<Relay>,
}
