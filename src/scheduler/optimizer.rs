//! Weighted interval scheduling by dynamic programming.
//!
//! # Algorithm
//!
//! 1. Normalize contracts into intervals (`end = start + duration`).
//! 2. Optionally prune dominated intervals.
//! 3. Sort intervals by end time, then start time (stable).
//! 4. For each sorted position k (1-indexed), find the latest compatible
//!    predecessor `p(k)`: the largest j < k with `end(j) <= start(k)`.
//! 5. `best(0) = 0`, `best(k) = max(best(k-1), price(k) + best(p(k)))`.
//! 6. Backtrack from k = n: if `best(k) == best(k-1)` move to k-1, otherwise
//!    record k and jump to `p(k)`. Reverse the record.
//!
//! # Tie-breaking
//! The inclusion branch wins only when strictly better, so among equally
//! profitable alternatives the earliest-ending contracts are kept.
//!
//! # Complexity
//! O(n log n) with binary predecessor search, O(n²) with linear search.
//! Memory is O(n); backtracking is iterative and takes at most n steps.
//! DP values are `i128`, so no sum of `i64` prices can overflow.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1

use tracing::debug;

use crate::error::OptimizeResult;
use crate::models::{Contract, Interval, Schedule, Solution};

use super::normalize::normalize;
use super::prune::prune_dominated;
use super::sort::sort_by_end;

/// Strategy for locating `p(k)`.
///
/// Both strategies produce identical predecessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PredecessorSearch {
    /// Binary search over the end-time prefix. O(log n) per interval.
    #[default]
    Binary,
    /// Backwards scan. O(n) per interval.
    Linear,
}

/// Single-ship contract optimizer.
///
/// # Example
///
/// ```
/// use spaceship_schedule::models::Contract;
/// use spaceship_schedule::scheduler::ContractOptimizer;
///
/// let contracts = vec![
///     Contract::new("C1", 0, 6, 310),
///     Contract::new("C2", 3, 3, 280),
///     Contract::new("C3", 2, 1, 120),
///     Contract::new("C4", 2, 7, 450),
///     Contract::new("C5", 3, 5, 450),
///     Contract::new("C6", 4, 6, 450),
/// ];
///
/// let solution = ContractOptimizer::new().optimize(&contracts).unwrap();
/// assert_eq!(solution.income, 570);
/// assert_eq!(solution.selected_ids, vec!["C3", "C5"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractOptimizer {
    prune: bool,
    search: PredecessorSearch,
}

impl ContractOptimizer {
    /// Creates an optimizer with pruning enabled and binary search.
    pub fn new() -> Self {
        Self {
            prune: true,
            search: PredecessorSearch::Binary,
        }
    }

    /// Enables or disables the dominated-contract pre-pass.
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Sets the predecessor search strategy.
    pub fn with_predecessor_search(mut self, search: PredecessorSearch) -> Self {
        self.search = search;
        self
    }

    /// Whether pruning is enabled.
    pub fn pruning(&self) -> bool {
        self.prune
    }

    /// Selects the most profitable set of non-overlapping contracts and
    /// returns their intervals.
    ///
    /// Every contract is validated before any pruning or optimization, so
    /// an invalid contract rejects the request even if it would have been
    /// pruned.
    pub fn schedule(&self, contracts: &[Contract]) -> OptimizeResult<Schedule> {
        let mut intervals = normalize(contracts)?;
        if self.prune {
            intervals = prune_dominated(intervals);
        }
        let kept = intervals.len();

        let sorted = sort_by_end(intervals);
        let schedule = select_optimal(&sorted, self.search);

        debug!(
            contracts = contracts.len(),
            kept,
            selected = schedule.len(),
            income = %schedule.income,
            "optimized contracts"
        );

        Ok(schedule)
    }

    /// Selects the most profitable set of non-overlapping contracts.
    pub fn optimize(&self, contracts: &[Contract]) -> OptimizeResult<Solution> {
        self.schedule(contracts).map(Solution::from)
    }
}

impl Default for ContractOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the DP over intervals already sorted by end time.
///
/// Unsorted input yields a wrong (but well-formed) schedule; route input
/// through [`sort_by_end`] first.
pub fn select_optimal(sorted: &[Interval], search: PredecessorSearch) -> Schedule {
    let n = sorted.len();
    if n == 0 {
        return Schedule::empty();
    }

    let pred = predecessors(sorted, search);

    // best[k]: optimal income using the first k intervals
    let mut best = vec![0i128; n + 1];
    for k in 1..=n {
        let include = i128::from(sorted[k - 1].price) + best[pred[k]];
        best[k] = if include > best[k - 1] {
            include
        } else {
            best[k - 1]
        };
    }

    let mut chosen = Vec::new();
    let mut k = n;
    while k > 0 {
        if best[k] == best[k - 1] {
            k -= 1;
        } else {
            chosen.push(k - 1);
            k = pred[k];
        }
    }
    chosen.reverse();

    Schedule {
        income: best[n],
        intervals: chosen.into_iter().map(|i| sorted[i].clone()).collect(),
    }
}

/// Computes `p(k)` for every 1-indexed position; `pred[0]` is unused.
fn predecessors(sorted: &[Interval], search: PredecessorSearch) -> Vec<usize> {
    let mut pred = vec![0usize; sorted.len() + 1];
    for k in 1..=sorted.len() {
        let start = sorted[k - 1].start;
        let prefix = &sorted[..k - 1];
        pred[k] = match search {
            // Ends are ascending, so compatible intervals form a prefix.
            PredecessorSearch::Binary => prefix.partition_point(|i| i.end <= start),
            PredecessorSearch::Linear => prefix
                .iter()
                .rposition(|i| i.end <= start)
                .map_or(0, |j| j + 1),
        };
    }
    pred
}

/// Optimizes with default settings.
///
/// Shorthand for `ContractOptimizer::new().optimize(contracts)`.
pub fn optimize(contracts: &[Contract]) -> OptimizeResult<Solution> {
    ContractOptimizer::new().optimize(contracts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidContractError;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn scenario() -> Vec<Contract> {
        vec![
            Contract::new("C1", 0, 6, 310),
            Contract::new("C2", 3, 3, 280),
            Contract::new("C3", 2, 1, 120),
            Contract::new("C4", 2, 7, 450),
            Contract::new("C5", 3, 5, 450),
            Contract::new("C6", 4, 6, 450),
        ]
    }

    fn all_optimizers() -> Vec<ContractOptimizer> {
        let mut out = Vec::new();
        for prune in [true, false] {
            for search in [PredecessorSearch::Binary, PredecessorSearch::Linear] {
                out.push(
                    ContractOptimizer::new()
                        .with_pruning(prune)
                        .with_predecessor_search(search),
                );
            }
        }
        out
    }

    /// Exhaustive search over all subsets. Only for small inputs.
    fn brute_force_income(contracts: &[Contract]) -> i128 {
        let n = contracts.len();
        let mut best = 0;
        for mask in 0u32..(1 << n) {
            let picked: Vec<&Contract> = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| &contracts[i])
                .collect();
            let feasible = picked.iter().enumerate().all(|(a, x)| {
                picked[a + 1..].iter().all(|y| x.is_compatible_with(y))
            });
            if feasible {
                best = best.max(picked.iter().map(|c| i128::from(c.price)).sum());
            }
        }
        best
    }

    fn random_contracts(rng: &mut StdRng, n: usize) -> Vec<Contract> {
        (0..n)
            .map(|i| {
                Contract::new(
                    format!("R{i}"),
                    rng.random_range(0..20),
                    rng.random_range(0..8),
                    rng.random_range(-20..100),
                )
            })
            .collect()
    }

    fn assert_feasible(schedule: &Schedule, contracts: &[Contract]) {
        assert_eq!(
            schedule.intervals.iter().map(|i| i128::from(i.price)).sum::<i128>(),
            schedule.income
        );
        for interval in &schedule.intervals {
            assert!(
                contracts.iter().any(|c| c.id == interval.id
                    && c.start == interval.start
                    && c.checked_end() == Some(interval.end)
                    && c.price == interval.price),
                "{} is not an offered contract",
                interval.id
            );
        }
        assert!(schedule.is_chronological(), "{:?}", schedule.intervals);
    }

    #[test]
    fn test_scenario() {
        for optimizer in all_optimizers() {
            let solution = optimizer.optimize(&scenario()).unwrap();
            assert_eq!(solution.income, 570);
            assert_eq!(solution.selected_ids, vec!["C3", "C5"]);
        }
    }

    #[test]
    fn test_free_function_matches_default() {
        assert_eq!(
            optimize(&scenario()).unwrap(),
            ContractOptimizer::default().optimize(&scenario()).unwrap()
        );
    }

    #[test]
    fn test_empty_input() {
        let solution = optimize(&[]).unwrap();
        assert_eq!(solution, Solution::empty());
    }

    #[test]
    fn test_single_contract() {
        let solution = optimize(&[Contract::new("only", 3, 4, 10)]).unwrap();
        assert_eq!(solution.income, 10);
        assert_eq!(solution.selected_ids, vec!["only"]);
    }

    #[test]
    fn test_all_overlapping_picks_highest_price() {
        let contracts = vec![
            Contract::new("A", 0, 10, 100),
            Contract::new("B", 1, 8, 300),
            Contract::new("C", 2, 9, 200),
        ];
        for optimizer in all_optimizers() {
            let solution = optimizer.optimize(&contracts).unwrap();
            assert_eq!(solution.income, 300);
            assert_eq!(solution.selected_ids, vec!["B"]);
        }
    }

    #[test]
    fn test_all_overlapping_tie_prefers_earliest_end() {
        let contracts = vec![
            Contract::new("late", 0, 10, 100), // ends 10
            Contract::new("early", 1, 5, 100), // ends 6
            Contract::new("cheap", 2, 9, 50), // ends 11
        ];
        for optimizer in all_optimizers() {
            let solution = optimizer.optimize(&contracts).unwrap();
            assert_eq!(solution.selected_ids, vec!["early"]);
        }
    }

    #[test]
    fn test_non_positive_prices_never_selected() {
        let contracts = vec![
            Contract::new("zero", 0, 1, 0),
            Contract::new("loss", 1, 1, -5),
            Contract::new("gain", 2, 1, 7),
        ];
        for optimizer in all_optimizers() {
            let solution = optimizer.optimize(&contracts).unwrap();
            assert_eq!(solution.income, 7);
            assert_eq!(solution.selected_ids, vec!["gain"]);
        }

        let solution = optimize(&[Contract::new("loss", 0, 1, -1)]).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.income, 0);
    }

    #[test]
    fn test_back_to_back_contracts_chain() {
        let contracts = vec![
            Contract::new("third", 6, 2, 10),
            Contract::new("first", 0, 3, 10),
            Contract::new("second", 3, 3, 10),
        ];
        let solution = optimize(&contracts).unwrap();
        assert_eq!(solution.income, 30);
        assert_eq!(solution.selected_ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_zero_duration_contracts() {
        let contracts = vec![
            Contract::new("point", 5, 0, 4),
            Contract::new("trip", 5, 3, 6),
            Contract::new("before", 2, 3, 5),
        ];
        for optimizer in all_optimizers() {
            let solution = optimizer.optimize(&contracts).unwrap();
            assert_eq!(solution.income, 15);
            assert_eq!(solution.selected_ids, vec!["before", "point", "trip"]);
        }
    }

    #[test]
    fn test_negative_duration_rejected() {
        let mut contracts = scenario();
        contracts.push(Contract::new("broken", 1, -1, 999));
        let err = optimize(&contracts).unwrap_err();
        assert_eq!(
            err,
            InvalidContractError::NegativeDuration {
                id: "broken".into(),
                duration: -1
            }
        );
    }

    #[test]
    fn test_end_overflow_rejected() {
        let mut contracts = scenario();
        contracts.push(Contract::new("far", i64::MAX, 1, 10));
        for optimizer in all_optimizers() {
            assert_eq!(
                optimizer.optimize(&contracts).unwrap_err(),
                InvalidContractError::EndOverflow {
                    id: "far".into(),
                    start: i64::MAX,
                    duration: 1
                }
            );
        }
    }

    #[test]
    fn test_income_beyond_i64_is_exact() {
        let contracts = vec![
            Contract::new("A", 0, 1, i64::MAX),
            Contract::new("B", 1, 1, i64::MAX),
            Contract::new("C", 2, 1, i64::MAX),
        ];
        for optimizer in all_optimizers() {
            let solution = optimizer.optimize(&contracts).unwrap();
            assert_eq!(solution.income, i128::from(i64::MAX) * 3);
            assert_eq!(solution.selected_ids, vec!["A", "B", "C"]);
        }
    }

    #[test]
    fn test_overlapping_extreme_prices_accepted() {
        let contracts = vec![
            Contract::new("A", 0, 5, i64::MAX),
            Contract::new("B", 1, 5, i64::MAX - 1),
        ];
        let solution = optimize(&contracts).unwrap();
        assert_eq!(solution.income, i128::from(i64::MAX));
        assert_eq!(solution.selected_ids, vec!["A"]);
    }

    #[test]
    fn test_duplicate_ids_keep_their_intervals() {
        let contracts = vec![Contract::new("A", 0, 10, 5), Contract::new("A", 10, 1, 5)];
        for optimizer in all_optimizers() {
            let schedule = optimizer.schedule(&contracts).unwrap();
            assert_eq!(schedule.income, 10);
            assert_eq!(schedule.intervals[0].end, 10);
            assert_eq!(schedule.intervals[1].start, 10);
            assert_eq!(schedule.busy_time(), 11);
        }
    }

    #[test]
    fn test_invalid_contract_rejected_even_if_prunable() {
        // Non-positive price would be pruned, but validation comes first.
        let contracts = vec![Contract::new("neg", 0, -3, -1)];
        let optimizer = ContractOptimizer::new().with_pruning(true);
        assert!(optimizer.pruning());
        assert!(optimizer.optimize(&contracts).is_err());
    }

    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let contracts = random_contracts(&mut rng, 30);
            let first = optimize(&contracts).unwrap();
            let second = optimize(&contracts).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..300 {
            let n = rng.random_range(0..=12);
            let contracts = random_contracts(&mut rng, n);
            let expected = brute_force_income(&contracts);

            for optimizer in all_optimizers() {
                let schedule = optimizer.schedule(&contracts).unwrap();
                assert_eq!(schedule.income, expected, "round {round}: {contracts:?}");
                assert_feasible(&schedule, &contracts);
            }
        }
    }

    #[test]
    fn test_strategies_and_pruning_agree() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..200 {
            let n = rng.random_range(0..60);
            let contracts = random_contracts(&mut rng, n);
            let reference = ContractOptimizer::new()
                .with_pruning(false)
                .with_predecessor_search(PredecessorSearch::Linear)
                .optimize(&contracts)
                .unwrap();
            for optimizer in all_optimizers() {
                assert_eq!(optimizer.optimize(&contracts).unwrap(), reference);
            }
        }
    }

    #[test]
    fn test_predecessors_identical() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let contracts = random_contracts(&mut rng, 40);
            let sorted = sort_by_end(normalize(&contracts).unwrap());
            assert_eq!(
                predecessors(&sorted, PredecessorSearch::Binary),
                predecessors(&sorted, PredecessorSearch::Linear)
            );
        }
    }

    #[test]
    fn test_scenario_predecessors() {
        // Sorted: C3, C1, C2, C5, C4, C6
        let sorted = sort_by_end(normalize(&scenario()).unwrap());
        let ids: Vec<&str> = sorted.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["C3", "C1", "C2", "C5", "C4", "C6"]);

        for search in [PredecessorSearch::Binary, PredecessorSearch::Linear] {
            assert_eq!(predecessors(&sorted, search), vec![0, 0, 0, 1, 1, 0, 1]);
        }
    }

    #[test]
    fn test_unsorted_input_is_not_rejected() {
        // Wrong answer, but no panic.
        let unsorted = vec![Interval::new("b", 5, 9, 3), Interval::new("a", 0, 2, 1)];
        let schedule = select_optimal(&unsorted, PredecessorSearch::Binary);
        assert!(schedule.income >= 0);
    }

    #[test]
    fn test_large_input_no_recursion() {
        let contracts: Vec<Contract> = (0..100_000)
            .map(|i| Contract::new(format!("L{i}"), i, 1, 1))
            .collect();
        let solution = optimize(&contracts).unwrap();
        assert_eq!(solution.income, 100_000);
        assert_eq!(solution.contract_count(), 100_000);
        assert_eq!(solution.selected_ids.first().map(String::as_str), Some("L0"));
    }
}
