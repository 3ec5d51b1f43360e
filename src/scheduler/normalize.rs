//! Contract → interval conversion.

use crate::error::OptimizeResult;
use crate::models::{Contract, Interval};
use crate::validation::contract_end;

/// Converts contracts into intervals with explicit end times.
///
/// Output has the same length and order as the input. Stops at the first
/// invalid contract; no partial result is returned.
pub fn normalize(contracts: &[Contract]) -> OptimizeResult<Vec<Interval>> {
    let mut intervals = Vec::with_capacity(contracts.len());
    for contract in contracts {
        let end = contract_end(contract)?;
        intervals.push(Interval::new(
            contract.id.clone(),
            contract.start,
            end,
            contract.price,
        ));
    }

    Ok(intervals)
}
