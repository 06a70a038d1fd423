use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{BankAccount, Operation};
use crate::errors::BankResult;

/// Abstraction over the account persistence collaborator.
pub trait AccountStore: Send + Sync {
    /// Fetches the stored snapshot for `account_id`.
    fn find(&self, account_id: Uuid) -> BankResult<BankAccount>;

    /// Replaces the stored snapshot for the account.
    fn save(&mut self, account: &BankAccount) -> BankResult<()>;

    /// Appends an accepted operation to the account's history.
    fn append_operation(&mut self, account_id: Uuid, operation: &Operation) -> BankResult<()>;
}

/// Abstraction over the operation history collaborator.
pub trait OperationHistory: Send + Sync {
    /// Returns the operations recorded for `account_id` in `(from, to]`.
    /// An empty result is legitimate, not a failure.
    fn operations_between(
        &self,
        account_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> BankResult<Vec<Operation>>;
}

/// Clock abstracts access to the current timestamp so services remain
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
