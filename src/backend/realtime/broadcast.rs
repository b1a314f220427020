/**
 * Live-Update Broadcasting
 *
 * This module provides the subscriber registry behind the `/ws` endpoint.
 * One `LiveRegistry` is created per server and shared through `AppState`;
 * cloning it clones a handle to the same subscriber set.
 *
 * # Delivery model
 *
 * Each subscriber owns an unbounded outbound queue. `broadcast` serializes
 * the event once and pushes the text into every registered queue. A writer
 * task per connection drains its queue into the socket.
 *
 * - Best effort: no acknowledgement, no retry, no replay for late joiners.
 * - Isolated: a closed or failing queue is skipped and never stops delivery
 *   to the remaining subscribers.
 * - Unordered across concurrent broadcasts.
 *
 * Subscribers leave the registry only through `unregister`, which the socket
 * handler calls on disconnect or protocol error. Broadcasting never removes
 * anyone.
 */
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::shared::LiveEvent;

/// Identifier of one registered subscriber connection
pub type SubscriberId = Uuid;

/// Sending half of a subscriber's outbound queue
pub type Outbox = mpsc::UnboundedSender<String>;

/// A freshly registered subscriber
///
/// The receiver yields serialized events, starting with the `CONNECTED`
/// acknowledgement.
#[derive(Debug)]
pub struct LiveSubscription {
    pub id: SubscriberId,
    pub receiver: mpsc::UnboundedReceiver<String>,
}

/// Registry of live-update subscribers
#[derive(Clone, Default)]
pub struct LiveRegistry {
    subscribers: Arc<RwLock<HashMap<SubscriberId, Outbox>>>,
}

impl std::fmt::Debug for LiveRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveRegistry")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl LiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection and queue a `CONNECTED` acknowledgement to it alone
    pub fn register(&self, outbox: Outbox) -> SubscriberId {
        let id = Uuid::new_v4();

        match serde_json::to_string(&LiveEvent::connected()) {
            Ok(ack) => {
                if outbox.send(ack).is_err() {
                    tracing::debug!("[Live] Subscriber {} closed before acknowledgement", id);
                }
            }
            Err(e) => tracing::error!("[Live] Failed to serialize acknowledgement: {:?}", e),
        }

        let total = {
            let mut subscribers = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
            subscribers.insert(id, outbox);
            subscribers.len()
        };
        tracing::info!("[Live] Subscriber {} registered ({} active)", id, total);
        id
    }

    /// Create an outbound queue, register it, and hand back the receiving end
    pub fn subscribe(&self) -> LiveSubscription {
        let (outbox, receiver) = mpsc::unbounded_channel();
        let id = self.register(outbox);
        LiveSubscription { id, receiver }
    }

    /// Remove a connection; unregistering an unknown id is a no-op
    pub fn unregister(&self, id: SubscriberId) -> bool {
        let (removed, total) = {
            let mut subscribers = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
            (subscribers.remove(&id).is_some(), subscribers.len())
        };
        if removed {
            tracing::info!("[Live] Subscriber {} unregistered ({} active)", id, total);
        }
        removed
    }

    /// Push an event to every registered connection that is still writable
    ///
    /// Returns how many connections the event was queued for.
    pub fn broadcast(&self, event: &LiveEvent) -> usize {
        let message = match serde_json::to_string(event) {
            Ok(message) => message,
            Err(e) => {
                tracing::error!("[Live] Failed to serialize {} event: {:?}", event.kind(), e);
                return 0;
            }
        };

        let subscribers = self.subscribers.read().unwrap_or_else(PoisonError::into_inner);
        if subscribers.is_empty() {
            tracing::debug!("[Live] No subscribers to receive {} event", event.kind());
            return 0;
        }

        let mut delivered = 0;
        for (id, outbox) in subscribers.iter() {
            if outbox.is_closed() {
                tracing::debug!("[Live] Skipping closed subscriber {}", id);
                continue;
            }
            match outbox.send(message.clone()) {
                Ok(()) => delivered += 1,
                Err(_) => tracing::warn!("[Live] Failed to queue {} event for {}", event.kind(), id),
            }
        }

        tracing::info!(
            "[Live] {} event broadcast to {}/{} subscribers",
            event.kind(),
            delivered,
            subscribers.len()
        );
        delivered
    }

    /// Number of registered connections, writable or not
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
