//! Schedule model.
//!
//! The optimizer's chosen intervals, kept alongside the [`Solution`] they
//! reduce to. Metrics are computed from the intervals themselves, so
//! duplicate contract IDs never resolve to the wrong contract.

use super::{Interval, Solution};

/// Intervals of an optimal selection, ordered by end time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Sum of the prices of the selected intervals.
    pub income: i128,
    /// Selected intervals in chronological order.
    pub intervals: Vec<Interval>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no interval was selected.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of selected intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Total time occupied by the selected intervals.
    ///
    /// Selected intervals are disjoint, so the sum never exceeds the latest
    /// end time; it saturates rather than wrapping regardless.
    pub fn busy_time(&self) -> i64 {
        self.intervals
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.duration()))
    }

    /// Whether each interval finishes before the next one starts.
    pub fn is_chronological(&self) -> bool {
        self.intervals.windows(2).all(|w| w[0].precedes(&w[1]))
    }
}

impl From<Schedule> for Solution {
    fn from(schedule: Schedule) -> Self {
        Solution {
            income: schedule.income,
            selected_ids: schedule.intervals.into_iter().map(|i| i.id).collect(),
        }
    }
}
