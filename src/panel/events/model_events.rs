//! # Model Events
//!
//! Events emitted when the panel's state changes in a way the host must
//! hear about. The hosting controller drains these from the binder and
//! republishes them on the event bus.

/// Events emitted when panel state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    /// The destination topic changed and the saved configuration is stale.
    /// Emitted exactly once per successful change, never on a same-name
    /// no-op. Carries the new topic (empty when unbound).
    ConfigurationChanged { topic: String },
}
