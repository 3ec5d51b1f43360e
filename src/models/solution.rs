//! Solution model.
//!
//! The optimizer's answer: the total income and the identifiers of the
//! chosen contracts in chronological order.

use serde::{Deserialize, Serialize};

/// An optimal selection of contracts.
///
/// Serialized as `{"income": <n>, "path": [<id>, ...]}`. Income is a sum of
/// `i64` prices and is held as `i128` so it cannot overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Sum of the prices of the selected contracts.
    pub income: i128,
    /// Selected contract IDs, ordered by end time.
    #[serde(rename = "path")]
    pub selected_ids: Vec<String>,
}

impl Solution {
    /// Creates an empty solution (no contracts, zero income).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no contract was selected.
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    /// Number of selected contracts.
    pub fn contract_count(&self) -> usize {
        self.selected_ids.len()
    }
}
