//! # Event Bus
//!
//! Central event distribution for decoupled communication between the
//! panel and its host using the observer pattern. The host subscribes to
//! model events (configuration changes) without the panel knowing who is
//! listening.

use super::model_events::ModelEvent;

/// Type alias for model event handlers to reduce complexity
pub type ModelEventHandler = Box<dyn Fn(&ModelEvent) + Send + Sync>;

/// Event bus for decoupled communication between components
pub trait EventBus: Send + Sync {
    /// Publish a model event to all subscribers
    fn publish_model_event(&mut self, event: ModelEvent);

    /// Subscribe to model events
    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler);
}

/// Simple in-memory event bus implementation
pub struct SimpleEventBus {
    model_handlers: Vec<ModelEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            model_handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish_model_event(&mut self, event: ModelEvent) {
        for handler in &self.model_handlers {
            handler(&event);
        }
    }

    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler) {
        self.model_handlers.push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn event_bus_should_deliver_model_events() {
        let mut bus = SimpleEventBus::new();
        let received_events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = received_events.clone();

        bus.subscribe_to_model_events(Box::new(move |event| {
            events_clone.lock().unwrap().push(event.clone());
        }));

        let event = ModelEvent::ConfigurationChanged {
            topic: "robot1".to_string(),
        };
        bus.publish_model_event(event.clone());

        let received = received_events.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], event);
    }

    #[test]
    fn event_bus_should_handle_multiple_subscribers() {
        let mut bus = SimpleEventBus::new();
        let first = Arc::new(Mutex::new(0));
        let second = Arc::new(Mutex::new(0));

        let first_clone = first.clone();
        bus.subscribe_to_model_events(Box::new(move |_| {
            *first_clone.lock().unwrap() += 1;
        }));

        let second_clone = second.clone();
        bus.subscribe_to_model_events(Box::new(move |_| {
            *second_clone.lock().unwrap() += 1;
        }));

        bus.publish_model_event(ModelEvent::ConfigurationChanged {
            topic: String::new(),
        });

        assert_eq!(*first.lock().unwrap(), 1);
        assert_eq!(*second.lock().unwrap(), 1);
    }

    #[test]
    fn event_bus_without_subscribers_should_not_panic() {
        let mut bus = SimpleEventBus::new();
        bus.publish_model_event(ModelEvent::ConfigurationChanged {
            topic: "robot1".to_string(),
        });
    }
}
