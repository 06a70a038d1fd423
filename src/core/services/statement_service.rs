//! Statement computation: the balance at an issue date plus the rolling
//! window of recent operations.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::ports::OperationHistory;
use crate::domain::{AccountStatement, BankAccount, Operation};
use crate::errors::BankResult;

/// Number of trailing days of history shown on a statement.
pub const STATEMENT_WINDOW_DAYS: i64 = 31;

/// Builds statements from operation histories. Pure: identical inputs yield
/// identical statements.
pub struct StatementService;

impl StatementService {
    /// Builds the statement for `account` from its full operation history.
    ///
    /// The balance is reconstructed by folding every dated operation up to
    /// `issue_date`; it is independent of the balance the snapshot carries.
    /// The operation list keeps entries dated strictly after
    /// `issue_date - 31 days` and strictly before the day after the issue
    /// date, most recent first. Undated operations participate in neither.
    pub fn build_statement(
        account: &BankAccount,
        operations: &[Operation],
        issue_date: DateTime<Utc>,
    ) -> AccountStatement {
        tracing::debug!(account = %account.account_id, %issue_date, "building account statement");
        let window_start = issue_date - Duration::days(STATEMENT_WINDOW_DAYS);
        let window_end = issue_date + Duration::days(1);
        let mut windowed: Vec<Operation> = operations
            .iter()
            .filter(|operation| {
                operation
                    .date_time
                    .map_or(false, |at| at > window_start && at < window_end)
            })
            .cloned()
            .collect();
        sort_most_recent_first(&mut windowed);
        AccountStatement {
            operations: windowed,
            balance_at_issue_date: balance_at(operations, issue_date),
        }
    }
}

/// Facade over the operation history collaborator for the pre-windowed
/// statement path: the collaborator performs the 31-day cut server-side and
/// the balance is folded over the returned slice.
pub struct StatementRetrieval {
    history: Box<dyn OperationHistory>,
}

impl StatementRetrieval {
    pub fn new(history: Box<dyn OperationHistory>) -> Self {
        Self { history }
    }

    /// Retrieves the statement for `account_id` as of `issue_date`.
    ///
    /// An account with no recorded operations yields an empty statement.
    /// Collaborator failures are logged and propagated.
    pub fn retrieve_statement(
        &self,
        account_id: Uuid,
        issue_date: DateTime<Utc>,
    ) -> BankResult<AccountStatement> {
        let from = issue_date - Duration::days(STATEMENT_WINDOW_DAYS);
        let mut operations = match self.history.operations_between(account_id, from, issue_date) {
            Ok(operations) => operations,
            Err(error) => {
                tracing::warn!(
                    account = %account_id,
                    %issue_date,
                    "failed to retrieve operations for statement: {error}"
                );
                return Err(error);
            }
        };
        if operations.is_empty() {
            return Ok(AccountStatement::empty());
        }
        let balance_at_issue_date = balance_at(&operations, issue_date);
        sort_most_recent_first(&mut operations);
        Ok(AccountStatement {
            operations,
            balance_at_issue_date,
        })
    }
}

fn balance_at(operations: &[Operation], issue_date: DateTime<Utc>) -> Decimal {
    operations
        .iter()
        .filter(|operation| operation.date_time.map_or(false, |at| at <= issue_date))
        .map(Operation::signed_amount)
        .fold(Decimal::ZERO, |total, amount| total + amount)
}

fn sort_most_recent_first(operations: &mut [Operation]) {
    operations.sort_by(|a, b| b.date_time.cmp(&a.date_time));
}
