//! Dominated-interval pruning.
//!
//! Removes intervals that can never be part of the optimizer's answer,
//! shrinking the DP input without changing its output.
//!
//! An interval X is dropped when:
//! 1. its price is not positive, or
//! 2. another interval Y has the same start, `0 < Y.duration <= X.duration`
//!    and `Y.price >= X.price`. For identical duration and price, the
//!    earlier input interval survives.
//!
//! # Complexity
//! O(n log n) for the (start, duration, price) ordering.

use crate::models::Interval;

/// Drops dominated intervals. Survivors keep their input order.
pub fn prune_dominated(intervals: Vec<Interval>) -> Vec<Interval> {
    let mut order: Vec<usize> = (0..intervals.len())
        .filter(|&i| intervals[i].price > 0)
        .collect();

    // Per start time: shorter first, then pricier, then input order.
    order.sort_by(|&a, &b| {
        let (x, y) = (&intervals[a], &intervals[b]);
        x.start
            .cmp(&y.start)
            .then(x.duration().cmp(&y.duration()))
            .then(y.price.cmp(&x.price))
            .then(a.cmp(&b))
    });

    let mut keep = vec![false; intervals.len()];
    let mut current_start: Option<i64> = None;
    let mut best_price: Option<i64> = None;

    for &idx in &order {
        let interval = &intervals[idx];
        if current_start != Some(interval.start) {
            current_start = Some(interval.start);
            best_price = None;
        }

        keep[idx] = !best_price.is_some_and(|p| p >= interval.price);

        // Zero-duration intervals are compatible with everything starting
        // at the same instant, so they dominate nothing.
        if interval.duration() > 0 {
            best_price = Some(best_price.map_or(interval.price, |p| p.max(interval.price)));
        }
    }

    intervals
        .into_iter()
        .zip(keep)
        .filter_map(|(interval, kept)| kept.then_some(interval))
        .collect()
}
