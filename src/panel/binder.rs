//! # Topic Binder
//!
//! Owns the destination topic name and the outbound publisher bound to
//! it. This is the one part of the panel with real invariants:
//!
//! - the publisher is present exactly while a destination is set (a bind
//!   failure degrades to "absent", see `set_topic`);
//! - rebinding always drops the old publisher before creating the new
//!   one, so commands can never leak to a stale destination;
//! - a repeated identical name is a no-op and fires no notification.
//!
//! The binder never reads input and never blocks; the hosting controller
//! drives it and drains its pending model events.

use crate::panel::events::{BindingState, ModelEvent};
use crate::panel::models::CommandRecord;
use crate::panel::transport::{Publisher, Transport, COMMAND_QUEUE_DEPTH};

/// Binds one outbound command channel to an operator-chosen topic
pub struct TopicBinder<T: Transport> {
    transport: T,
    topic: String,
    publisher: Option<T::Handle>,
    pending_events: Vec<ModelEvent>,
}

impl<T: Transport> TopicBinder<T> {
    /// Create an unbound binder on the given transport
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            topic: String::new(),
            publisher: None,
            pending_events: Vec::new(),
        }
    }

    /// Set the destination topic, rebinding the publisher if it changed
    ///
    /// Accepts any string; the empty string unbinds. A repeated identical
    /// name does nothing. On change the old publisher is dropped first,
    /// then a new one is bound with a depth-1 queue, and one
    /// `ConfigurationChanged` event is queued. A transport bind failure
    /// is logged and leaves the publisher absent; sends then no-op,
    /// which is the same thing the operator sees for an unreachable
    /// destination.
    pub fn set_topic(&mut self, new_topic: &str) {
        if new_topic == self.topic {
            return;
        }

        // Tear down the old channel before anything else; there must be
        // no window in which publishers for two destinations exist.
        self.publisher = None;
        self.topic = new_topic.to_string();

        if self.topic.is_empty() {
            tracing::debug!("destination cleared, panel unbound");
        } else {
            match self
                .transport
                .create_publisher(&self.topic, COMMAND_QUEUE_DEPTH)
            {
                Ok(publisher) => self.publisher = Some(publisher),
                Err(e) => {
                    tracing::warn!("failed to bind command topic '{}': {e}", self.topic);
                }
            }
        }

        self.pending_events.push(ModelEvent::ConfigurationChanged {
            topic: self.topic.clone(),
        });
    }

    /// Emit a one-shot arm/disarm command over the bound channel
    ///
    /// Silent no-op when the transport is not operational or no channel
    /// is bound; the operator retries by pressing the control again.
    /// Delivery is fire-and-forget.
    pub fn send_arm_command(&self, armed: bool) {
        if !self.transport.is_operational() {
            tracing::debug!("transport not operational, dropping command");
            return;
        }
        let Some(publisher) = &self.publisher else {
            tracing::debug!("no destination bound, dropping command");
            return;
        };
        publisher.publish(&CommandRecord::arm(armed));
        tracing::debug!(armed, topic = %self.topic, "command sent");
    }

    /// The current destination name, verbatim (empty when unbound)
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Restore a persisted destination name (rebinds like `set_topic`)
    pub fn restore_topic(&mut self, topic: &str) {
        self.set_topic(topic);
    }

    /// Whether an outbound channel is currently held
    pub fn state(&self) -> BindingState {
        if self.publisher.is_some() {
            BindingState::Bound
        } else {
            BindingState::Unbound
        }
    }

    /// Take the model events queued since the last drain
    pub fn take_pending_events(&mut self) -> Vec<ModelEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
