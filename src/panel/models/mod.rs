//! # Panel Models
//!
//! Data models owned by the panel component.

pub mod command_record;

pub use command_record::{CommandRecord, Vector3};
