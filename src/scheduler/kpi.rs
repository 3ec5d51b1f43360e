//! Solution quality metrics (KPIs).
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Selected / Rejected | Contract counts |
//! | Busy time | Sum of selected durations |
//! | Horizon | Latest end time over all offered contracts |
//! | Utilization | Busy time / horizon |
//! | Acceptance rate | Selected / offered |
//! | Avg price | Income / selected |

use crate::models::{Contract, Schedule};

/// Solution performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionKpi {
    /// Number of selected contracts.
    pub selected: usize,
    /// Number of offered contracts left out.
    pub rejected: usize,
    /// Time the ship spends on selected contracts.
    pub busy_time: i64,
    /// Latest end time across all offered contracts.
    pub horizon: i64,
    /// Fraction of the horizon spent flying (0.0..1.0).
    pub utilization: f64,
    /// Fraction of offered contracts selected (0.0..1.0).
    pub acceptance_rate: f64,
    /// Mean price of selected contracts.
    pub avg_price: f64,
}

impl SolutionKpi {
    /// Computes KPIs from a schedule and the contracts it was chosen from.
    pub fn calculate(schedule: &Schedule, contracts: &[Contract]) -> Self {
        let selected = schedule.len();
        let rejected = contracts.len().saturating_sub(selected);
        let busy_time = schedule.busy_time();

        let horizon = contracts
            .iter()
            .filter_map(Contract::checked_end)
            .max()
            .unwrap_or(0);

        let utilization = if horizon > 0 {
            busy_time as f64 / horizon as f64
        } else {
            0.0
        };

        let acceptance_rate = if contracts.is_empty() {
            0.0
        } else {
            selected as f64 / contracts.len() as f64
        };

        let avg_price = if selected == 0 {
            0.0
        } else {
            schedule.income as f64 / selected as f64
        };

        Self {
            selected,
            rejected,
            busy_time,
            horizon,
            utilization,
            acceptance_rate,
            avg_price,
        }
    }
}
