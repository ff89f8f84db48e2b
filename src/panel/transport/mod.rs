//! # Transport Abstraction Layer
//!
//! Trait seams for the outbound publish boundary. The panel never
//! inspects transport internals: it asks for a publisher bound to a
//! topic name, hands records to it, and checks one process-wide liveness
//! flag before sending.
//!
//! ```text
//! Production:  TopicBinder ──▶ LocalTransport ──▶ in-process topic queues
//! Testing:     TopicBinder ──▶ MockTransport  ──▶ lifecycle + record log
//! ```

use anyhow::Result;

use crate::panel::models::CommandRecord;

pub mod local;
pub mod mock;

pub use local::{LocalPublisher, LocalTransport, Subscription};
pub use mock::{MockTransport, PublisherLifecycle};

/// Outbound queue depth for arm/disarm publishers
///
/// Depth 1 gives latest-value semantics: if the transport is momentarily
/// backed up, only the newest unsent command survives. A stale arm or
/// disarm must never be delivered after a newer one was intended.
pub const COMMAND_QUEUE_DEPTH: usize = 1;

/// An owned outbound channel bound to one destination topic
///
/// Delivery is best-effort and fire-and-forget: no acknowledgment, no
/// retry. Dropping the handle tears the channel down.
pub trait Publisher {
    /// Hand a record to the transport for delivery
    fn publish(&self, record: &CommandRecord);
}

/// Provider of outbound publish channels
pub trait Transport {
    type Handle: Publisher;

    /// Open a publisher bound to `topic` with a bounded outbound queue
    fn create_publisher(&self, topic: &str, queue_depth: usize) -> Result<Self::Handle>;

    /// Process-wide liveness query
    ///
    /// When this reports false the panel silently drops outbound commands;
    /// the operator retries by pressing the control again.
    fn is_operational(&self) -> bool;
}
