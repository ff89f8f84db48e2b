//! # Command Record Model
//!
//! The fixed six-field numeric payload sent on every arm/disarm press.
//! Shaped like a command-velocity message: two 3-vectors, `linear` and
//! `angular`. Only `linear.x` carries meaning (1 = armed, 0 = disarmed);
//! the remaining five fields are always zero.

use serde::{Deserialize, Serialize};

/// A 3-dimensional vector component of the command record
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// The outbound command record
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandRecord {
    pub linear: Vector3,
    pub angular: Vector3,
}

impl CommandRecord {
    /// Build an arm/disarm record: `linear.x` is 1 when arming, 0 when
    /// disarming, every other field 0.
    pub fn arm(armed: bool) -> Self {
        Self {
            linear: Vector3::new(if armed { 1.0 } else { 0.0 }, 0.0, 0.0),
            angular: Vector3::zero(),
        }
    }

    /// True when this record commands the armed state
    pub fn is_armed(&self) -> bool {
        self.linear.x != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_record_should_set_only_leading_field() {
        let record = CommandRecord::arm(true);

        assert_eq!(record.linear.x, 1.0);
        assert_eq!(record.linear.y, 0.0);
        assert_eq!(record.linear.z, 0.0);
        assert_eq!(record.angular, Vector3::zero());
        assert!(record.is_armed());
    }

    #[test]
    fn disarm_record_should_be_all_zeroes() {
        let record = CommandRecord::arm(false);

        assert_eq!(record, CommandRecord::default());
        assert!(!record.is_armed());
    }

    #[test]
    fn record_should_serialize_to_json() {
        let record = CommandRecord::arm(true);
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"linear\""));
        assert!(json.contains("\"angular\""));

        let back: CommandRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
