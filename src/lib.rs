//! # ArmPanel - Arm/Disarm Panel for Namespaced Control Topics
//!
//! An operator-facing control panel that emits one-shot arm/disarm
//! command records to an operator-chosen destination topic, rebinding
//! its outbound channel safely whenever the destination changes.
//!
//! ## Architecture
//!
//! The panel sits behind trait seams for everything it touches:
//!
//! ```text
//! ┌─────────────┐   InputEvent   ┌──────────────┐   records    ┌───────────┐
//! │ EventSource │───────────────▶│   ArmPanel   │─────────────▶│ Transport │
//! │             │                │              │              │           │
//! │ - console   │                │ - TopicBinder│              │ - topic   │
//! │ - scripted  │                │ - input text │              │   queues  │
//! └─────────────┘                └──────────────┘              └───────────┘
//!                                        │ ModelEvent
//!                                        ▼
//!                                 ┌──────────────┐    save/load
//!                                 │AppController │◀───────────▶ ConfigStore
//!                                 │  (event loop)│
//!                                 └──────────────┘
//! ```
//!
//! The binder guarantees that at most one publisher exists at a time,
//! that rebinding tears the old one down first, and that a repeated
//! identical destination is a side-effect-free no-op.

pub mod cmd_args;
pub mod config;
pub mod panel;

// Re-export main types for easy access
pub use panel::*;
