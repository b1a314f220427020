//! Real-time Update Module
//!
//! This module pushes forum mutations to connected clients over WebSocket.
//!
//! # Architecture
//!
//! - **`broadcast`** - `LiveRegistry`: register, unregister, broadcast
//! - **`subscription`** - The `/ws` upgrade handler driving one connection
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Subscriber registry and fan-out
//! └── subscription.rs - WebSocket subscription handler
//! ```
//!
//! # Event Types
//!
//! See [`crate::shared::LiveEvent`]: `CONNECTED` (sent to the new subscriber
//! only), `NEW_QUESTION`, `NEW_ANSWER`, `LIKE_ANSWER`.
//!
//! # Example
//!
//! ```rust
//! use forum_live::backend::realtime::LiveRegistry;
//! use forum_live::shared::LiveEvent;
//!
//! let registry = LiveRegistry::new();
//! let mut subscription = registry.subscribe();
//! assert!(subscription.receiver.try_recv().is_ok()); // CONNECTED
//!
//! let delivered = registry.broadcast(&LiveEvent::connected());
//! assert_eq!(delivered, 1);
//! ```

/// Subscriber registry and fan-out
pub mod broadcast;

/// WebSocket subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{LiveRegistry, LiveSubscription, Outbox, SubscriberId};
pub use subscription::handle_live_subscription;
