//! Shared in-memory collaborators for the integration suites.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bank_core::core::ports::{AccountStore, OperationHistory};
use bank_core::domain::{AccountKind, AccountStatus, BankAccount, Operation};
use bank_core::errors::{BankError, BankResult};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn sample_instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

pub fn current_account(balance: i64, overdraft_limit: i64) -> BankAccount {
    BankAccount::new(
        Decimal::from(balance),
        AccountStatus::Activated,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        AccountKind::Current {
            overdraft_limit: Decimal::from(overdraft_limit),
        },
    )
}

pub fn savings_account(balance: i64, deposit_limit: i64) -> BankAccount {
    BankAccount::new(
        Decimal::from(balance),
        AccountStatus::Activated,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        AccountKind::Savings {
            deposit_limit: Decimal::from(deposit_limit),
        },
    )
}

/// In-memory stand-in for the persistence collaborators. Cloning shares the
/// underlying state, so tests keep a handle while the service owns a box.
#[derive(Clone, Default)]
pub struct InMemoryBank {
    state: Arc<Mutex<BankState>>,
}

#[derive(Default)]
struct BankState {
    accounts: HashMap<Uuid, BankAccount>,
    operations: HashMap<Uuid, Vec<Operation>>,
}

impl InMemoryBank {
    pub fn with_account(account: BankAccount) -> Self {
        let bank = Self::default();
        bank.state
            .lock()
            .unwrap()
            .accounts
            .insert(account.account_id, account);
        bank
    }

    pub fn account(&self, account_id: Uuid) -> Option<BankAccount> {
        self.state.lock().unwrap().accounts.get(&account_id).cloned()
    }

    pub fn operations(&self, account_id: Uuid) -> Vec<Operation> {
        self.state
            .lock()
            .unwrap()
            .operations
            .get(&account_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn record_operation(&self, account_id: Uuid, operation: Operation) {
        self.state
            .lock()
            .unwrap()
            .operations
            .entry(account_id)
            .or_default()
            .push(operation);
    }
}

impl AccountStore for InMemoryBank {
    fn find(&self, account_id: Uuid) -> BankResult<BankAccount> {
        self.account(account_id)
            .ok_or(BankError::AccountNotFound(account_id))
    }

    fn save(&mut self, account: &BankAccount) -> BankResult<()> {
        self.state
            .lock()
            .unwrap()
            .accounts
            .insert(account.account_id, account.clone());
        Ok(())
    }

    fn append_operation(&mut self, account_id: Uuid, operation: &Operation) -> BankResult<()> {
        self.record_operation(account_id, operation.clone());
        Ok(())
    }
}

impl OperationHistory for InMemoryBank {
    fn operations_between(
        &self,
        account_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> BankResult<Vec<Operation>> {
        Ok(self
            .operations(account_id)
            .into_iter()
            .filter(|operation| {
                operation
                    .date_time
                    .map_or(false, |at| at > from && at <= to)
            })
            .collect())
    }
}
