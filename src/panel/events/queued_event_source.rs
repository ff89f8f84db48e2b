//! # Queued Event Source
//!
//! Scripted implementation of `EventSource` backed by a queue of
//! pre-programmed events, allowing deterministic panel sessions without
//! any console attached.

use anyhow::Result;
use std::collections::VecDeque;
use std::time::Duration;

use super::event_source::EventSource;
use super::input_events::InputEvent;

/// Event source that replays events from a pre-programmed queue
#[derive(Debug, Clone, Default)]
pub struct QueuedEventSource {
    events: VecDeque<InputEvent>,
}

impl QueuedEventSource {
    /// Create a new queued event source with an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queued event source with pre-populated events
    pub fn with_events(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// Append an event to the queue
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Number of events still queued
    pub fn pending_count(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for QueuedEventSource {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<InputEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available in queue"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}
