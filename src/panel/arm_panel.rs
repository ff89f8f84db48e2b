//! # Arm Panel
//!
//! The host-facing panel object. Wraps the topic binder together with
//! the committed text of the destination field, dispatches host input
//! events, and implements the save/load capability the host calls for
//! configuration persistence.

use crate::panel::binder::TopicBinder;
use crate::panel::events::{BindingState, InputEvent, ModelEvent};
use crate::panel::persistence::{Panel, PanelConfig, TOPIC_KEY};
use crate::panel::transport::Transport;

/// Operator panel emitting arm/disarm commands to one destination topic
pub struct ArmPanel<T: Transport> {
    binder: TopicBinder<T>,
    topic_input: String,
}

impl<T: Transport> ArmPanel<T> {
    /// Create an unbound panel on the given transport
    pub fn new(transport: T) -> Self {
        Self {
            binder: TopicBinder::new(transport),
            topic_input: String::new(),
        }
    }

    /// Dispatch one host input event
    ///
    /// `CloseRequested` is a session concern and is ignored here; the
    /// hosting controller acts on it.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ArmRequested => self.binder.send_arm_command(true),
            InputEvent::DisarmRequested => self.binder.send_arm_command(false),
            InputEvent::TopicCommitted { topic } => {
                self.binder.set_topic(&topic);
                self.topic_input = topic;
            }
            InputEvent::CloseRequested => {}
        }
    }

    /// The committed text of the destination field
    pub fn topic_input(&self) -> &str {
        &self.topic_input
    }

    /// Current binding state, for hosts that gray out controls
    pub fn state(&self) -> BindingState {
        self.binder.state()
    }

    /// The bound destination name (empty when unbound)
    pub fn topic(&self) -> &str {
        self.binder.topic()
    }

    /// Drain the model events queued since the last call
    pub fn take_pending_events(&mut self) -> Vec<ModelEvent> {
        self.binder.take_pending_events()
    }

    /// Emit an arm/disarm command over the bound channel
    pub fn send_arm_command(&self, armed: bool) {
        self.binder.send_arm_command(armed);
    }
}

impl<T: Transport> Panel for ArmPanel<T> {
    fn save(&self, config: &mut PanelConfig) {
        config.set(TOPIC_KEY, self.binder.topic());
    }

    fn load(&mut self, config: &PanelConfig) {
        if let Some(topic) = config.get(TOPIC_KEY) {
            // Rebind first so the channel is consistent with the text the
            // host will display.
            self.binder.restore_topic(topic);
            self.topic_input = topic.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::models::CommandRecord;
    use crate::panel::transport::MockTransport;

    #[test]
    fn arm_event_should_publish_armed_record() {
        let transport = MockTransport::new();
        let mut panel = ArmPanel::new(transport.clone());

        panel.handle_event(InputEvent::TopicCommitted {
            topic: "robot1".to_string(),
        });
        panel.handle_event(InputEvent::ArmRequested);

        assert_eq!(
            transport.published(),
            vec![("robot1".to_string(), CommandRecord::arm(true))]
        );
    }

    #[test]
    fn disarm_event_should_publish_disarmed_record() {
        let transport = MockTransport::new();
        let mut panel = ArmPanel::new(transport.clone());

        panel.handle_event(InputEvent::TopicCommitted {
            topic: "robot1".to_string(),
        });
        panel.handle_event(InputEvent::DisarmRequested);

        assert_eq!(
            transport.published(),
            vec![("robot1".to_string(), CommandRecord::arm(false))]
        );
    }

    #[test]
    fn committed_topic_should_update_input_and_binding() {
        let transport = MockTransport::new();
        let mut panel = ArmPanel::new(transport);

        panel.handle_event(InputEvent::TopicCommitted {
            topic: "robot2".to_string(),
        });

        assert_eq!(panel.topic_input(), "robot2");
        assert_eq!(panel.topic(), "robot2");
        assert_eq!(panel.state(), BindingState::Bound);
    }

    #[test]
    fn close_event_should_be_ignored_by_panel() {
        let transport = MockTransport::new();
        let mut panel = ArmPanel::new(transport.clone());

        panel.handle_event(InputEvent::CloseRequested);

        assert!(transport.published().is_empty());
        assert_eq!(panel.state(), BindingState::Unbound);
    }

    #[test]
    fn save_should_write_topic_key() {
        let transport = MockTransport::new();
        let mut panel = ArmPanel::new(transport);
        panel.handle_event(InputEvent::TopicCommitted {
            topic: "robot1".to_string(),
        });

        let mut config = PanelConfig::new();
        panel.save(&mut config);

        assert_eq!(config.get(TOPIC_KEY), Some("robot1"));
    }

    #[test]
    fn load_should_rebind_and_reflect_text() {
        let transport = MockTransport::new();
        let mut panel = ArmPanel::new(transport.clone());

        let mut config = PanelConfig::new();
        config.set(TOPIC_KEY, "robot1");
        panel.load(&config);

        assert_eq!(panel.topic(), "robot1");
        assert_eq!(panel.topic_input(), "robot1");
        assert_eq!(panel.state(), BindingState::Bound);
        assert_eq!(transport.live_publisher_count(), 1);
    }

    #[test]
    fn load_with_absent_key_should_leave_panel_unbound() {
        let transport = MockTransport::new();
        let mut panel = ArmPanel::new(transport.clone());

        panel.load(&PanelConfig::new());

        assert_eq!(panel.state(), BindingState::Unbound);
        assert_eq!(panel.topic_input(), "");
        assert_eq!(transport.live_publisher_count(), 0);
    }

    #[test]
    fn save_then_load_should_round_trip() {
        let transport = MockTransport::new();
        let mut panel = ArmPanel::new(transport.clone());
        panel.handle_event(InputEvent::TopicCommitted {
            topic: "robot1".to_string(),
        });
        panel.take_pending_events();

        let mut config = PanelConfig::new();
        panel.save(&mut config);
        panel.load(&config);

        // Restoring the current topic is a no-op: no rebind, no event.
        assert!(panel.take_pending_events().is_empty());
        assert_eq!(transport.live_publisher_count(), 1);
    }
}
