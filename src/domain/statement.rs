use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::operation::Operation;

/// Computed account statement: the operations inside the query window, most
/// recent first, and the balance reconstructed at the issue date. Built
/// fresh on every request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountStatement {
    pub operations: Vec<Operation>,
    pub balance_at_issue_date: Decimal,
}

impl AccountStatement {
    /// Statement for an account with no recorded operations.
    pub fn empty() -> Self {
        Self {
            operations: Vec::new(),
            balance_at_issue_date: Decimal::ZERO,
        }
    }
}
