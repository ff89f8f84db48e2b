//! # Panel Component
//!
//! The embeddable arm/disarm panel and its boundary seams. All
//! components are designed with clear separation of concerns and
//! testability: the binder owns the outbound channel, the panel object
//! faces the host, and every external dependency (input, transport,
//! configuration storage) is a trait.

pub mod arm_panel;
pub mod binder;
pub mod controllers;
pub mod events;
pub mod models;
pub mod persistence;
pub mod transport;

// Re-export core types
pub use arm_panel::ArmPanel;
pub use binder::TopicBinder;
pub use controllers::AppController;
pub use events::*;
pub use models::{CommandRecord, Vector3};
pub use persistence::{ConfigStore, IniConfigStore, Panel, PanelConfig, TOPIC_KEY};
pub use transport::{
    LocalTransport, MockTransport, Publisher, Subscription, Transport, COMMAND_QUEUE_DEPTH,
};
