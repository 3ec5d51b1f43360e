//! End-time ordering of intervals.

use crate::models::Interval;

/// Orders intervals by ascending end time.
///
/// Ties on end time are broken by ascending start time, then by input
/// order (the sort is stable). Start as secondary key puts a zero-length
/// interval at `t` after every interval ending at `t`, so the optimizer
/// sees those as its predecessors.
pub fn sort_by_end(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by_key(|i| (i.end, i.start));
    intervals
}
