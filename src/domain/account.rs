use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a bank account. Carried on the snapshot for callers;
/// the balance rules do not gate on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountStatus {
    Created,
    Activated,
    Suspended,
    Unknown,
}

/// Enumerates the supported account variants, each carrying the balance
/// bound specific to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountKind {
    /// May run a negative balance down to `-overdraft_limit`.
    Current { overdraft_limit: Decimal },
    /// May not exceed `deposit_limit` and never goes negative.
    Savings { deposit_limit: Decimal },
}

impl AccountKind {
    /// Lowest balance this variant allows, `None` when unbounded below.
    pub fn minimum_balance(&self) -> Option<Decimal> {
        match self {
            AccountKind::Current { overdraft_limit } => Some(-*overdraft_limit),
            AccountKind::Savings { .. } => Some(Decimal::ZERO),
        }
    }

    /// Highest balance this variant allows, `None` when unbounded above.
    pub fn maximum_balance(&self) -> Option<Decimal> {
        match self {
            AccountKind::Current { .. } => None,
            AccountKind::Savings { deposit_limit } => Some(*deposit_limit),
        }
    }

    /// Variant label stamped onto operation records.
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Current { .. } => "Current",
            AccountKind::Savings { .. } => "Savings",
        }
    }
}

/// Immutable snapshot of a bank account. A successful operation produces a
/// new snapshot; existing values are never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankAccount {
    pub account_id: Uuid,
    pub balance: Decimal,
    pub status: AccountStatus,
    pub created_at: NaiveDate,
    pub kind: AccountKind,
}

impl BankAccount {
    /// Creates a new account snapshot with a fresh identifier.
    pub fn new(
        balance: Decimal,
        status: AccountStatus,
        created_at: NaiveDate,
        kind: AccountKind,
    ) -> Self {
        Self {
            account_id: Uuid::new_v4(),
            balance,
            status,
            created_at,
            kind,
        }
    }

    /// Returns a copy of this snapshot with the balance replaced.
    pub fn with_balance(&self, balance: Decimal) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }
}
