//! # Event Source Abstraction
//!
//! The panel never reads input itself; the hosting controller pulls
//! events from an `EventSource` and dispatches them. Abstracting the
//! source keeps the component host-agnostic and makes the whole loop
//! testable without a console:
//!
//! ```text
//! Production:  AppController ──▶ StdinEventSource  ──▶ console lines
//! Testing:     AppController ──▶ QueuedEventSource ──▶ VecDeque<InputEvent>
//! ```

use anyhow::Result;
use std::time::Duration;

use super::input_events::InputEvent;

/// Trait for abstracting panel input sources
///
/// Production implementations translate a real host surface (console
/// lines, host widget callbacks) into panel input events. Test
/// implementations replay a pre-programmed queue.
pub trait EventSource {
    /// Check if events are available without blocking
    ///
    /// Returns true if events are ready to be read, false if the timeout
    /// elapsed with nothing available.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next available event
    ///
    /// Should only be called after poll() returns true.
    fn read(&mut self) -> Result<InputEvent>;

    /// Check if the event source is exhausted
    ///
    /// For live sources this always returns false. For scripted sources it
    /// indicates all queued events have been consumed, which lets the
    /// controller end the session instead of polling forever.
    fn is_exhausted(&self) -> bool {
        false
    }
}
