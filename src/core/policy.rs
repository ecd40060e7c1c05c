//! Withdrawal policy evaluation
//!
//! Pure functions deciding whether a withdrawal may proceed and which amount
//! the base withdrawal rules receive. No account state is mutated here.
//!
//! # Checking accounts
//!
//! A checking withdrawal is evaluated in this order:
//! 1. Reject once the number of withdrawals reached the configured cap
//! 2. Reject when the amount exceeds balance plus overdraft limit
//! 3. Pass `min(amount, balance)` down to the base rules
//!
//! Step 3 means the overdraft limit widens the accepted request but never the
//! amount actually debited: a request above the balance draws the account
//! down to zero, and at zero balance the capped amount is rejected by the
//! base rules as invalid.
//!
//! # Standard accounts
//!
//! A standard withdrawal is evaluated in this order:
//! 1. Reject when the amount exceeds the balance
//! 2. Reject when the amount exceeds the per-withdrawal limit
//! 3. Reject once the number of withdrawals reached the configured cap
//! 4. Pass the amount unchanged down to the base rules

use crate::types::{AccountNumber, BankError, CheckingPolicy, StandardPolicy, WithdrawalPolicy};
use rust_decimal::Decimal;

/// Evaluate the account's policy for a withdrawal request
///
/// # Arguments
///
/// * `policy` - The account's withdrawal policy
/// * `account` - Account number, for error context
/// * `balance` - Current balance
/// * `withdrawals_done` - Successful withdrawals made so far
/// * `amount` - Requested amount
///
/// # Returns
///
/// * `Ok(Decimal)` - The amount the base withdrawal rules should receive
/// * `Err(BankError)` - `DailyLimitExceeded`, `OverdraftExceeded`,
///   `WithdrawalLimitExceeded` or `InsufficientFunds`
pub fn authorize_withdrawal(
    policy: &WithdrawalPolicy,
    account: AccountNumber,
    balance: Decimal,
    withdrawals_done: u32,
    amount: Decimal,
) -> Result<Decimal, BankError> {
    match policy {
        WithdrawalPolicy::Standard(rules) => {
            authorize_standard(rules, account, balance, withdrawals_done, amount)
        }
        WithdrawalPolicy::Checking(rules) => {
            authorize_checking(rules, account, balance, withdrawals_done, amount)
        }
    }
}

fn authorize_standard(
    rules: &StandardPolicy,
    account: AccountNumber,
    balance: Decimal,
    withdrawals_done: u32,
    amount: Decimal,
) -> Result<Decimal, BankError> {
    if amount > balance {
        return Err(BankError::insufficient_funds(account, balance, amount));
    }

    if amount > rules.withdrawal_limit {
        return Err(BankError::withdrawal_limit_exceeded(
            account,
            rules.withdrawal_limit,
            amount,
        ));
    }

    if withdrawals_done >= rules.max_daily_withdrawals {
        return Err(BankError::daily_limit_exceeded(
            account,
            rules.max_daily_withdrawals,
        ));
    }

    Ok(amount)
}

fn authorize_checking(
    rules: &CheckingPolicy,
    account: AccountNumber,
    balance: Decimal,
    withdrawals_done: u32,
    amount: Decimal,
) -> Result<Decimal, BankError> {
    if withdrawals_done >= rules.max_daily_withdrawals {
        return Err(BankError::daily_limit_exceeded(
            account,
            rules.max_daily_withdrawals,
        ));
    }

    let available = balance
        .checked_add(rules.overdraft_limit)
        .unwrap_or(Decimal::MAX);
    if amount > available {
        return Err(BankError::overdraft_exceeded(account, available, amount));
    }

    Ok(amount.min(balance))
}

/// Base withdrawal rules shared by every policy
///
/// Rejects non-positive amounts and amounts above the balance.
pub fn check_base_withdrawal(
    account: AccountNumber,
    balance: Decimal,
    amount: Decimal,
) -> Result<(), BankError> {
    if amount <= Decimal::ZERO {
        return Err(BankError::invalid_amount(amount));
    }

    if amount > balance {
        return Err(BankError::insufficient_funds(account, balance, amount));
    }

    Ok(())
}
