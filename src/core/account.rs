//! Account balance management
//!
//! This module provides the `Account` struct, which owns a balance and its
//! transaction history and applies the balance mutation rules.
//!
//! The Account is responsible for:
//! - Validating deposit and withdrawal amounts
//! - Applying the account's withdrawal policy
//! - Recording exactly one transaction per successful balance change
//! - Rendering statements and summaries

use crate::core::history::History;
use crate::core::policy::{authorize_withdrawal, check_base_withdrawal};
use crate::types::{
    format_money, AccountNumber, AccountSummary, BankError, Client, Transaction, WithdrawalPolicy,
};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// A bank account held by one client
///
/// The holder is shared with the registry that created the account. The
/// history is owned by the account and grows for its whole life.
#[derive(Debug, Clone)]
pub struct Account {
    branch_code: String,
    number: AccountNumber,
    holder: Arc<Client>,
    balance: Decimal,
    history: History,
    policy: WithdrawalPolicy,
    withdrawals_done: u32,
}

impl Account {
    /// Create an account with zero balance and empty history
    ///
    /// # Arguments
    ///
    /// * `branch_code` - Branch the account belongs to
    /// * `number` - Account number, unique within the bank
    /// * `holder` - The client holding the account
    /// * `policy` - Withdrawal rules of the account
    pub fn new(
        branch_code: impl Into<String>,
        number: AccountNumber,
        holder: Arc<Client>,
        policy: WithdrawalPolicy,
    ) -> Self {
        Account {
            branch_code: branch_code.into(),
            number,
            holder,
            balance: Decimal::ZERO,
            history: History::new(),
            policy,
            withdrawals_done: 0,
        }
    }

    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder(&self) -> &Client {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn policy(&self) -> &WithdrawalPolicy {
        &self.policy
    }

    /// Number of successful withdrawals so far
    pub fn withdrawals_done(&self) -> u32 {
        self.withdrawals_done
    }

    /// Deposit funds into the account
    ///
    /// Increases the balance by `amount` and records a Deposit.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is zero or negative
    ///
    /// On error neither balance nor history change.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::invalid_amount(amount))?;

        self.balance = new_balance;
        self.history.record(Transaction::deposit(amount));

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// The account's policy decides whether the request is accepted and which
    /// amount reaches the base rules (see [`crate::core::policy`]).
    ///
    /// # Errors
    ///
    /// - `DailyLimitExceeded` from either policy
    /// - `OverdraftExceeded` from a checking policy
    /// - `WithdrawalLimitExceeded` from a standard policy
    /// - `InvalidAmount` if the amount handed to the base rules is not positive
    /// - `InsufficientFunds` if it exceeds the balance
    ///
    /// On error neither balance, history nor the withdrawal counter change.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        let debit = authorize_withdrawal(
            &self.policy,
            self.number,
            self.balance,
            self.withdrawals_done,
            amount,
        )?;

        check_base_withdrawal(self.number, self.balance, debit)?;

        self.balance -= debit;
        self.history.record(Transaction::withdrawal(debit));
        self.withdrawals_done += 1;

        Ok(())
    }

    /// Render the statement: every transaction, oldest first, then the balance
    pub fn statement(&self) -> String {
        format!(
            "{}\nBalance: {}",
            self.history.render(),
            format_money(self.balance)
        )
    }

    /// Read-only summary for listings
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            branch_code: self.branch_code.clone(),
            number: self.number,
            holder_name: self.holder.name().to_string(),
            holder_tax_id: self.holder.tax_id().to_string(),
            kind: self.policy.label(),
            balance: self.balance,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
