//! Contract selection pipeline and solution metrics.
//!
//! Normalizer → (Pruner) → Sorter → Optimizer, each a pure function over
//! owned data, plus KPI evaluation of the result.
//!
//! # Algorithm
//!
//! `ContractOptimizer` solves weighted interval scheduling exactly with an
//! O(n log n) dynamic program. See [`optimizer`] for the recurrence and the
//! tie-breaking policy.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod kpi;
mod normalize;
pub mod optimizer;
mod prune;
mod sort;

pub use kpi::SolutionKpi;
pub use normalize::normalize;
pub use optimizer::{optimize, select_optimal, ContractOptimizer, PredecessorSearch};
pub use prune::prune_dominated;
pub use sort::sort_by_end;
