//! Transaction-related types for the bank console
//!
//! A transaction is the immutable record of one balance movement. Accounts
//! append one to their history for every successful deposit or withdrawal.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol used when rendering amounts
pub const CURRENCY_SYMBOL: &str = "R$";

/// Timestamp format used in statement lines
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Kinds of balance movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// Immutable record of a monetary movement
///
/// The amount is always stored as a positive value; the sign comes from the
/// kind (see [`Transaction::signed_amount`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: NaiveDateTime,
}

impl Transaction {
    /// Record a movement happening now, in local time
    pub fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Self::at(kind, amount, Local::now().naive_local())
    }

    /// Record a movement at an explicit point in time
    pub fn at(kind: TransactionKind, amount: Decimal, timestamp: NaiveDateTime) -> Self {
        Transaction {
            kind,
            amount,
            timestamp,
        }
    }

    /// Shorthand for a deposit happening now
    pub fn deposit(amount: Decimal) -> Self {
        Self::new(TransactionKind::Deposit, amount)
    }

    /// Shorthand for a withdrawal happening now
    pub fn withdrawal(amount: Decimal) -> Self {
        Self::new(TransactionKind::Withdrawal, amount)
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Contribution of this transaction to the balance
    ///
    /// `+amount` for deposits, `-amount` for withdrawals.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal => -self.amount,
        }
    }
}

/// Renders one statement line: `2024-05-01 10:00:00 - Deposit: R$ 100.00`
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            format_money(self.amount)
        )
    }
}

/// Format an amount as currency rounded to two decimal places
pub fn format_money(amount: Decimal) -> String {
    format!("{} {:.2}", CURRENCY_SYMBOL, amount.round_dp(2))
}
