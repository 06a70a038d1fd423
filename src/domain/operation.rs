use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a recorded operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OperationType {
    Deposit,
    Withdrawal,
    Unknown,
}

/// A single recorded movement on an account. Amounts are stored as positive
/// magnitudes; direction comes from the operation type. Records loaded from
/// storage may carry no timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Operation {
    pub operation_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
    pub amount: Decimal,
    pub kind: OperationType,
    pub account_kind: String,
}

impl Operation {
    /// Creates a freshly recorded operation with a new identifier.
    pub fn new(
        date_time: DateTime<Utc>,
        amount: Decimal,
        kind: OperationType,
        account_kind: impl Into<String>,
    ) -> Self {
        Self {
            operation_id: Uuid::new_v4(),
            date_time: Some(date_time),
            amount,
            kind,
            account_kind: account_kind.into(),
        }
    }

    /// The amount this operation contributes to a running ledger total.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            OperationType::Deposit => self.amount,
            OperationType::Withdrawal => -self.amount,
            OperationType::Unknown => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn recorded(kind: OperationType) -> Operation {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        Operation::new(at, Decimal::from(250), kind, "Current")
    }

    #[test]
    fn signed_amount_follows_operation_type() {
        assert_eq!(
            recorded(OperationType::Deposit).signed_amount(),
            Decimal::from(250)
        );
        assert_eq!(
            recorded(OperationType::Withdrawal).signed_amount(),
            Decimal::from(-250)
        );
        assert_eq!(
            recorded(OperationType::Unknown).signed_amount(),
            Decimal::ZERO
        );
    }
}
