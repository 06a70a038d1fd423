//! Account domain models and computed value objects.

pub mod account;
pub mod operation;
pub mod outcome;
pub mod statement;

pub use account::{AccountKind, AccountStatus, BankAccount};
pub use operation::{Operation, OperationType};
pub use outcome::OperationOutcome;
pub use statement::AccountStatement;
