//! # Mock Transport
//!
//! Test implementation of the transport seam that records publisher
//! lifecycle and every published record, so tests can assert rebind
//! ordering and exact wire payloads without a broker.

use anyhow::Result;
use std::sync::{Arc, Mutex};

use super::{Publisher, Transport};
use crate::panel::models::CommandRecord;

/// One entry in the mock's publisher lifecycle log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublisherLifecycle {
    Created(String),
    Dropped(String),
}

#[derive(Default)]
struct MockState {
    lifecycle: Vec<PublisherLifecycle>,
    published: Vec<(String, CommandRecord)>,
    created_depths: Vec<usize>,
    operational: bool,
    fail_next_create: bool,
}

/// Transport double that records everything the panel does to it
#[derive(Clone)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                operational: true,
                ..MockState::default()
            })),
        }
    }

    /// Control the liveness flag seen by the panel
    pub fn set_operational(&self, operational: bool) {
        self.state.lock().unwrap().operational = operational;
    }

    /// Make the next create_publisher call fail
    pub fn fail_next_create(&self) {
        self.state.lock().unwrap().fail_next_create = true;
    }

    /// Publisher lifecycle log in creation/drop order
    pub fn lifecycle(&self) -> Vec<PublisherLifecycle> {
        self.state.lock().unwrap().lifecycle.clone()
    }

    /// Every record published, with the topic it went to
    pub fn published(&self) -> Vec<(String, CommandRecord)> {
        self.state.lock().unwrap().published.clone()
    }

    /// Queue depths requested by create_publisher calls, in order
    pub fn created_depths(&self) -> Vec<usize> {
        self.state.lock().unwrap().created_depths.clone()
    }

    /// Number of publishers currently alive (created minus dropped)
    pub fn live_publisher_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        let created = state
            .lifecycle
            .iter()
            .filter(|entry| matches!(entry, PublisherLifecycle::Created(_)))
            .count();
        let dropped = state
            .lifecycle
            .iter()
            .filter(|entry| matches!(entry, PublisherLifecycle::Dropped(_)))
            .count();
        created - dropped
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    type Handle = MockPublisher;

    fn create_publisher(&self, topic: &str, queue_depth: usize) -> Result<Self::Handle> {
        let mut state = self.state.lock().unwrap();
        if state.fail_next_create {
            state.fail_next_create = false;
            anyhow::bail!("create_publisher failed by request");
        }
        state
            .lifecycle
            .push(PublisherLifecycle::Created(topic.to_string()));
        state.created_depths.push(queue_depth);
        Ok(MockPublisher {
            topic: topic.to_string(),
            state: self.state.clone(),
        })
    }

    fn is_operational(&self) -> bool {
        self.state.lock().unwrap().operational
    }
}

/// Publish handle issued by `MockTransport`
pub struct MockPublisher {
    topic: String,
    state: Arc<Mutex<MockState>>,
}

impl Publisher for MockPublisher {
    fn publish(&self, record: &CommandRecord) {
        self.state
            .lock()
            .unwrap()
            .published
            .push((self.topic.clone(), *record));
    }
}

impl Drop for MockPublisher {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap()
            .lifecycle
            .push(PublisherLifecycle::Dropped(self.topic.clone()));
    }
}
