//! Input validation for contract lists.
//!
//! Checks each contract before optimization. Detects:
//! - Negative durations
//! - Negative start times
//! - End times outside the `i64` range
//!
//! The normalizer runs the same checks fail-fast; [`validate_contracts`]
//! collects every problem so callers can report them all at once.
//! Duplicate IDs are not rejected.

use crate::error::{InvalidContractError, OptimizeResult};
use crate::models::Contract;

/// Validation result.
pub type ValidationResult = Result<(), Vec<InvalidContractError>>;

/// Validates a single contract and returns its end time.
pub fn contract_end(contract: &Contract) -> OptimizeResult<i64> {
    if contract.duration < 0 {
        return Err(InvalidContractError::NegativeDuration {
            id: contract.id.clone(),
            duration: contract.duration,
        });
    }
    if contract.start < 0 {
        return Err(InvalidContractError::NegativeStart {
            id: contract.id.clone(),
            start: contract.start,
        });
    }
    contract
        .checked_end()
        .ok_or_else(|| InvalidContractError::EndOverflow {
            id: contract.id.clone(),
            start: contract.start,
            duration: contract.duration,
        })
}

/// Validates a whole request.
///
/// # Returns
/// `Ok(())` if every contract is schedulable, `Err(errors)` with all
/// detected issues in input order.
pub fn validate_contracts(contracts: &[Contract]) -> ValidationResult {
    let errors: Vec<InvalidContractError> = contracts
        .iter()
        .filter_map(|c| contract_end(c).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
