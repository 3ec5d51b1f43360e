//! Error types for contract optimization.

use thiserror::Error;

/// A contract that cannot be scheduled.
///
/// Raised before the optimizer runs; one invalid contract rejects the
/// whole request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidContractError {
    #[error("contract '{id}' has negative duration {duration}")]
    NegativeDuration { id: String, duration: i64 },

    #[error("contract '{id}' has negative start time {start}")]
    NegativeStart { id: String, start: i64 },

    #[error("contract '{id}' ends beyond the representable time range (start {start}, duration {duration})")]
    EndOverflow { id: String, start: i64, duration: i64 },
}

impl InvalidContractError {
    /// ID of the offending contract.
    pub fn contract_id(&self) -> &str {
        match self {
            Self::NegativeDuration { id, .. }
            | Self::NegativeStart { id, .. }
            | Self::EndOverflow { id, .. } => id,
        }
    }
}

pub type OptimizeResult<T> = Result<T, InvalidContractError>;
