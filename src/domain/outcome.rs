use serde::{Deserialize, Serialize};

use crate::errors::BankError;

/// Outcome of a deposit or withdrawal request. Expected business failures
/// are carried as values so callers can map them without unwinding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum OperationOutcome {
    Ok(String),
    Failure(BankError),
}

impl OperationOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, OperationOutcome::Ok(_))
    }

    /// Human-readable message for either outcome.
    pub fn message(&self) -> String {
        match self {
            OperationOutcome::Ok(message) => message.clone(),
            OperationOutcome::Failure(error) => error.to_string(),
        }
    }
}
