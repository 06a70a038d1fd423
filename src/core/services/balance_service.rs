//! Balance-mutation rules for deposits and withdrawals.

use rust_decimal::Decimal;

use crate::domain::BankAccount;
use crate::errors::{BankError, BankResult};

/// Applies deposits and withdrawals to account snapshots under the
/// variant-specific balance bounds. Pure: every call returns a new snapshot
/// and leaves the input untouched.
pub struct BalanceService;

impl BalanceService {
    /// Subtracts `amount` from the balance, honoring the variant floor.
    pub fn withdraw(account: &BankAccount, amount: Decimal) -> BankResult<BankAccount> {
        Self::validate_amount(amount)?;
        let new_balance = account.balance - amount;
        if account
            .kind
            .minimum_balance()
            .map_or(false, |floor| new_balance < floor)
        {
            return Err(BankError::InsufficientFunds);
        }
        Ok(account.with_balance(new_balance))
    }

    /// Adds `amount` to the balance, honoring the variant ceiling.
    pub fn deposit(account: &BankAccount, amount: Decimal) -> BankResult<BankAccount> {
        Self::validate_amount(amount)?;
        let new_balance = account.balance + amount;
        if account
            .kind
            .maximum_balance()
            .map_or(false, |ceiling| new_balance > ceiling)
        {
            return Err(BankError::DepositLimitExceeded);
        }
        Ok(account.with_balance(new_balance))
    }

    fn validate_amount(amount: Decimal) -> BankResult<()> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount);
        }
        Ok(())
    }
}
