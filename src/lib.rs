//! Single-ship contract scheduling.
//!
//! Selects the most profitable set of non-overlapping contracts for one
//! spaceship (weighted interval scheduling), and serves the optimizer over
//! HTTP.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Contract`, `Interval`, `Schedule`, `Solution`
//! - **`validation`**: Input checks (negative durations/starts, overflow)
//! - **`scheduler`**: Normalizer, pruner, sorter, DP optimizer, KPIs
//! - **`server`** (feature `server`): axum endpoint, config, error mapping
//!
//! # Example
//!
//! ```
//! use spaceship_schedule::{optimize, Contract};
//!
//! let contracts = vec![
//!     Contract::new("C1", 0, 6, 310),
//!     Contract::new("C3", 2, 1, 120),
//!     Contract::new("C5", 3, 5, 450),
//! ];
//! let solution = optimize(&contracts).unwrap();
//! assert_eq!(solution.income, 570);
//! assert_eq!(solution.selected_ids, vec!["C3", "C5"]);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

pub use error::{InvalidContractError, OptimizeResult};
pub use models::{Contract, Schedule, Solution};
pub use scheduler::{optimize, ContractOptimizer};
