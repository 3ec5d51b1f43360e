//! Interval model.
//!
//! The derived `[start, end)` span of a contract, built once by the
//! normalizer and read-only afterwards.

/// A contract's occupied time span with its price.
///
/// Invariant: `end >= start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// Identifier copied from the contract.
    pub id: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
    /// Contract price.
    pub price: i64,
}

impl Interval {
    pub(crate) fn new(id: impl Into<String>, start: i64, end: i64, price: i64) -> Self {
        debug_assert!(end >= start);
        Self {
            id: id.into(),
            start,
            end,
            price,
        }
    }

    /// Length of the span.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether `self` finishes no later than `other` starts.
    #[inline]
    pub fn precedes(&self, other: &Interval) -> bool {
        self.end <= other.start
    }
}
