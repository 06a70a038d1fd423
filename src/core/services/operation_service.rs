//! Perform-operation boundary coordinating account lookup, rule validation,
//! and persistence of accepted operations.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::ports::{AccountStore, Clock, SystemClock};
use crate::core::services::BalanceService;
use crate::domain::{BankAccount, Operation, OperationOutcome, OperationType};
use crate::errors::BankResult;

/// Facade that applies the balance rules against stored account state and
/// records accepted operations through the persistence collaborator.
///
/// Every expected business failure is recovered into the returned
/// [`OperationOutcome`]; nothing is raised across this boundary.
pub struct OperationService {
    store: Box<dyn AccountStore>,
    clock: Box<dyn Clock>,
}

impl OperationService {
    pub fn new(store: Box<dyn AccountStore>) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }

    pub fn with_clock(store: Box<dyn AccountStore>, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &dyn AccountStore {
        self.store.as_ref()
    }

    /// Withdraws `amount` from the identified account.
    pub fn withdraw(&mut self, account_id: Uuid, amount: Decimal) -> OperationOutcome {
        match self.perform(
            account_id,
            amount,
            OperationType::Withdrawal,
            BalanceService::withdraw,
        ) {
            Ok(_) => OperationOutcome::Ok("WITHDRAWAL successful".into()),
            Err(error) => OperationOutcome::Failure(error),
        }
    }

    /// Deposits `amount` onto the identified account.
    pub fn deposit(&mut self, account_id: Uuid, amount: Decimal) -> OperationOutcome {
        match self.perform(
            account_id,
            amount,
            OperationType::Deposit,
            BalanceService::deposit,
        ) {
            Ok(_) => OperationOutcome::Ok("DEPOSIT successful".into()),
            Err(error) => OperationOutcome::Failure(error),
        }
    }

    fn perform(
        &mut self,
        account_id: Uuid,
        amount: Decimal,
        kind: OperationType,
        apply: impl FnOnce(&BankAccount, Decimal) -> BankResult<BankAccount>,
    ) -> BankResult<BankAccount> {
        let account = self.store.find(account_id)?;
        let updated = apply(&account, amount)?;
        let operation = Operation::new(self.clock.now(), amount, kind, account.kind.label());
        self.store.save(&updated)?;
        self.store.append_operation(account_id, &operation)?;
        Ok(updated)
    }
}
