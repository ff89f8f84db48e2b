//! # Events Module
//!
//! Re-exports all event system components organized by category:
//! input events from the host surface, model events emitted by the
//! panel, the event bus seam, and the pluggable input sources.

pub mod event_bus;
pub mod event_source;
pub mod input_events;
pub mod model_events;
pub mod queued_event_source;
pub mod stdin_event_source;
pub mod types;

pub use event_bus::{EventBus, ModelEventHandler, SimpleEventBus};
pub use event_source::EventSource;
pub use input_events::InputEvent;
pub use model_events::ModelEvent;
pub use queued_event_source::QueuedEventSource;
pub use stdin_event_source::StdinEventSource;
pub use types::BindingState;
