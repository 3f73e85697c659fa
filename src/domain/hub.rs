//! Connection hub: the owned registry of active WebSocket connections.
//!
//! [`Hub`] maps each [`ConnectionId`] to the outbound frame sender of
//! its connection task. All mutation of the active set goes through
//! [`Hub::register`] and [`Hub::unregister`]; event handlers only reach
//! the set indirectly via [`Hub::broadcast`].

use std::collections::HashMap;

use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

use super::ConnectionId;
use super::chat_event::ServerEvent;

/// Registry of active connections with fan-out delivery.
///
/// Uses a `RwLock<HashMap<...>>`: register/unregister take the write
/// lock, broadcast only the read lock.
///
/// # Concurrency
///
/// - Broadcasts from different handlers may run concurrently.
/// - Register/unregister are serialized against broadcasts.
#[derive(Debug, Default)]
pub struct Hub {
    connections: RwLock<HashMap<ConnectionId, UnboundedSender<ServerEvent>>>,
}

impl Hub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection to the active set.
    ///
    /// No-op on duplicate registration: the first sender for an id wins.
    pub async fn register(&self, id: ConnectionId, sender: UnboundedSender<ServerEvent>) {
        let mut map = self.connections.write().await;
        map.entry(id).or_insert(sender);
    }

    /// Removes a connection from the active set.
    ///
    /// Idempotent: removing an absent id is a no-op.
    pub async fn unregister(&self, id: ConnectionId) {
        let mut map = self.connections.write().await;
        map.remove(&id);
    }

    /// Delivers `event` to every currently registered connection,
    /// including the one that triggered it.
    ///
    /// Fire-and-forget per connection: a receiver whose task has already
    /// gone away is skipped, not treated as an error. Returns the number
    /// of connections the event was handed to.
    pub async fn broadcast(&self, event: &ServerEvent) -> usize {
        let map = self.connections.read().await;
        let mut delivered = 0;
        for sender in map.values() {
            if sender.send(event.clone()).is_ok() {
                delivered += 1;
            }
        }
        delivered
    }

    /// Returns the current number of registered connections.
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    fn make_event(content: &str) -> ServerEvent {
        use crate::domain::chat_event::{BroadcastMessage, UserRef};
        ServerEvent::ReceiveMessage(BroadcastMessage {
            id: 1,
            content: content.to_string(),
            timestamp: chrono::Utc::now(),
            user: UserRef {
                name: "Alice".to_string(),
            },
        })
    }

    #[tokio::test]
    async fn broadcast_reaches_every_connection() {
        let hub = Hub::new();
        let (tx_a, mut rx_a) = mpsc::unbounded_channel();
        let (tx_b, mut rx_b) = mpsc::unbounded_channel();
        hub.register(ConnectionId::new(), tx_a).await;
        hub.register(ConnectionId::new(), tx_b).await;

        let event = make_event("hi");
        let delivered = hub.broadcast(&event).await;
        assert_eq!(delivered, 2);

        assert_eq!(rx_a.recv().await.as_ref(), Some(&event));
        assert_eq!(rx_b.recv().await.as_ref(), Some(&event));
    }

    #[tokio::test]
    async fn broadcast_without_connections_delivers_nothing() {
        let hub = Hub::new();
        assert_eq!(hub.broadcast(&make_event("hi")).await, 0);
    }

    #[tokio::test]
    async fn duplicate_register_is_noop() {
        let hub = Hub::new();
        let id = ConnectionId::new();
        let (tx_first, mut rx_first) = mpsc::unbounded_channel();
        let (tx_second, mut rx_second) = mpsc::unbounded_channel();

        hub.register(id, tx_first).await;
        hub.register(id, tx_second).await;
        assert_eq!(hub.connection_count().await, 1);

        hub.broadcast(&make_event("hi")).await;
        assert!(rx_first.try_recv().is_ok());
        assert!(rx_second.try_recv().is_err());
    }

    #[tokio::test]
    async fn unregister_is_idempotent() {
        let hub = Hub::new();
        let id = ConnectionId::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        hub.register(id, tx).await;

        hub.unregister(id).await;
        hub.unregister(id).await;
        hub.unregister(ConnectionId::new()).await;
        assert_eq!(hub.connection_count().await, 0);
    }

    #[tokio::test]
    async fn unregister_does_not_affect_other_connections() {
        let hub = Hub::new();
        let gone = ConnectionId::new();
        let (tx_gone, _rx_gone) = mpsc::unbounded_channel();
        let (tx_live, mut rx_live) = mpsc::unbounded_channel();
        hub.register(gone, tx_gone).await;
        hub.register(ConnectionId::new(), tx_live).await;

        hub.unregister(gone).await;
        let delivered = hub.broadcast(&make_event("still here")).await;
        assert_eq!(delivered, 1);
        assert!(rx_live.try_recv().is_ok());
    }

    #[tokio::test]
    async fn closed_receiver_is_skipped() {
        let hub = Hub::new();
        let (tx_dead, rx_dead) = mpsc::unbounded_channel();
        let (tx_live, mut rx_live) = mpsc::unbounded_channel();
        hub.register(ConnectionId::new(), tx_dead).await;
        hub.register(ConnectionId::new(), tx_live).await;
        drop(rx_dead);

        let delivered = hub.broadcast(&make_event("hi")).await;
        assert_eq!(delivered, 1);
        assert!(rx_live.try_recv().is_ok());
    }
}
