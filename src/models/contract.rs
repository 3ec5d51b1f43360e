//! Contract model.
//!
//! A contract is a time-bound job offered to the spaceship: it must start
//! exactly at `start`, occupies the ship for `duration` time units, and pays
//! `price` on completion.

use serde::{Deserialize, Serialize};

/// A contract offered to the spaceship.
///
/// # Time Representation
/// Times are integer units relative to an epoch (t=0) chosen by the
/// caller (hours in the original booking service).
///
/// # Wire Format
/// Serialized as `{"id", "start", "duration", "price"}`. The identifier is
/// also accepted under the legacy `name` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Contract identifier, unique within a request.
    #[serde(alias = "name")]
    pub id: String,
    /// Start time. Must be non-negative.
    pub start: i64,
    /// Duration. Must be non-negative; zero is allowed.
    pub duration: i64,
    /// Price paid for the contract. Non-positive prices are never selected.
    pub price: i64,
}

impl Contract {
    /// Creates a contract.
    pub fn new(id: impl Into<String>, start: i64, duration: i64, price: i64) -> Self {
        Self {
            id: id.into(),
            start,
            duration,
            price,
        }
    }

    /// End time (`start + duration`), or `None` on overflow.
    #[inline]
    pub fn checked_end(&self) -> Option<i64> {
        self.start.checked_add(self.duration)
    }

    /// Whether two contracts can both be flown by one ship.
    ///
    /// Intervals are half-open: a contract ending at `t` is compatible with
    /// one starting at `t`.
    pub fn is_compatible_with(&self, other: &Contract) -> bool {
        match (self.checked_end(), other.checked_end()) {
            (Some(self_end), Some(other_end)) => {
                self_end <= other.start || other_end <= self.start
            }
            _ => false,
        }
    }
}
