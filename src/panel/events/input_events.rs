//! # Input Events
//!
//! Events delivered by the host UI surface. The panel is agnostic to how
//! they are produced: buttons in a host window, console lines, or a
//! scripted queue in tests.

/// Events from the operator-facing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Operator requested the armed state
    ArmRequested,

    /// Operator requested the disarmed state
    DisarmRequested,

    /// Operator committed a destination topic name (focus left the text
    /// field, Enter was pressed, or a console `topic` line arrived).
    /// An empty string means "unbind".
    TopicCommitted { topic: String },

    /// Host asked the panel session to end
    CloseRequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_committed_should_carry_topic_data() {
        let event = InputEvent::TopicCommitted {
            topic: "robot1/cmd".to_string(),
        };

        match event {
            InputEvent::TopicCommitted { topic } => assert_eq!(topic, "robot1/cmd"),
            _ => panic!("Expected TopicCommitted event"),
        }
    }

    #[test]
    fn trigger_events_should_be_comparable() {
        assert_eq!(InputEvent::ArmRequested, InputEvent::ArmRequested);
        assert_ne!(InputEvent::ArmRequested, InputEvent::DisarmRequested);
    }
}
