//! # Local Transport
//!
//! In-process topic broker backing the standalone host. Each topic holds
//! one bounded queue; publishing past the depth evicts the oldest record
//! so the newest command always survives. Subscribers drain the queue
//! non-blockingly.

use anyhow::Result;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use super::{Publisher, Transport};
use crate::panel::models::CommandRecord;

struct TopicQueue {
    records: VecDeque<CommandRecord>,
    depth: usize,
    publishers: usize,
}

impl TopicQueue {
    fn new(depth: usize) -> Self {
        Self {
            records: VecDeque::new(),
            depth: depth.max(1),
            publishers: 0,
        }
    }
}

struct BrokerState {
    topics: HashMap<String, TopicQueue>,
    operational: bool,
}

/// In-process topic broker
///
/// Cheap to clone; clones share the same broker state, so a host can keep
/// one handle for subscriptions while the panel owns another.
#[derive(Clone)]
pub struct LocalTransport {
    state: Arc<Mutex<BrokerState>>,
}

impl LocalTransport {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(BrokerState {
                topics: HashMap::new(),
                operational: true,
            })),
        }
    }

    /// Open a subscription that drains records published to `topic`
    pub fn subscribe(&self, topic: &str) -> Subscription {
        if let Ok(mut state) = self.state.lock() {
            state
                .topics
                .entry(topic.to_string())
                .or_insert_with(|| TopicQueue::new(1));
        }
        Subscription {
            topic: topic.to_string(),
            state: self.state.clone(),
        }
    }

    /// Number of live publishers currently bound to `topic`
    pub fn publisher_count(&self, topic: &str) -> usize {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.topics.get(topic).map(|queue| queue.publishers))
            .unwrap_or(0)
    }

    /// Flip the liveness flag so hosts can simulate transport shutdown
    pub fn shut_down(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.operational = false;
        }
    }
}

impl Default for LocalTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for LocalTransport {
    type Handle = LocalPublisher;

    fn create_publisher(&self, topic: &str, queue_depth: usize) -> Result<Self::Handle> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| anyhow::anyhow!("broker state poisoned"))?;

        let queue = state
            .topics
            .entry(topic.to_string())
            .or_insert_with(|| TopicQueue::new(queue_depth));
        queue.depth = queue_depth.max(1);
        queue.publishers += 1;

        tracing::debug!("publisher bound to '{topic}' (depth {queue_depth})");
        Ok(LocalPublisher {
            topic: topic.to_string(),
            state: self.state.clone(),
        })
    }

    fn is_operational(&self) -> bool {
        self.state
            .lock()
            .map(|state| state.operational)
            .unwrap_or(false)
    }
}

/// Owned publish handle for one topic on a `LocalTransport`
pub struct LocalPublisher {
    topic: String,
    state: Arc<Mutex<BrokerState>>,
}

impl Publisher for LocalPublisher {
    fn publish(&self, record: &CommandRecord) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        if !state.operational {
            return;
        }
        if let Some(queue) = state.topics.get_mut(&self.topic) {
            queue.records.push_back(*record);
            while queue.records.len() > queue.depth {
                queue.records.pop_front();
                tracing::trace!("evicted stale record on '{}'", self.topic);
            }
        }
    }
}

impl Drop for LocalPublisher {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            if let Some(queue) = state.topics.get_mut(&self.topic) {
                queue.publishers = queue.publishers.saturating_sub(1);
            }
        }
        tracing::debug!("publisher released from '{}'", self.topic);
    }
}

/// Consumer side of a topic queue
pub struct Subscription {
    topic: String,
    state: Arc<Mutex<BrokerState>>,
}

impl Subscription {
    /// Take the oldest queued record, if any (non-blocking)
    pub fn try_recv(&self) -> Option<CommandRecord> {
        self.state
            .lock()
            .ok()
            .and_then(|mut state| {
                state
                    .topics
                    .get_mut(&self.topic)
                    .and_then(|queue| queue.records.pop_front())
            })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}
