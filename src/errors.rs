use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Business-level failures reported by the account services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("the amount must be greater than zero")]
    InvalidAmount,
    #[error("the withdrawal amount exceeds the available balance and the authorized overdraft limit")]
    InsufficientFunds,
    #[error("the deposit exceeds the maximum allowed balance for a savings account")]
    DepositLimitExceeded,
    #[error("bank account not found: {0}")]
    AccountNotFound(Uuid),
    #[error("operation failed: {0}")]
    OperationFailed(String),
}

pub type BankResult<T> = std::result::Result<T, BankError>;
