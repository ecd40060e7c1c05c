//! Operations accepted by the bank and the outcomes they produce
//!
//! Front ends (menu loop, script replay) parse user input into an
//! [`Operation`] and hand it to the dispatcher, which returns an [`Outcome`]
//! on success.

use super::account::{AccountKind, AccountNumber, AccountSummary};
use super::client::ClientId;
use super::transaction::format_money;
use rust_decimal::Decimal;
use std::fmt;

/// A single already-parsed request against the bank
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Register a new client
    CreateClient {
        name: String,
        tax_id: String,
        address: String,
        birth_date: Option<String>,
    },

    /// Open an account of the given kind for an existing client
    CreateAccount { tax_id: String, kind: AccountKind },

    /// Credit the client's account
    Deposit { tax_id: String, amount: Decimal },

    /// Debit the client's account
    Withdraw { tax_id: String, amount: Decimal },

    /// Render the client's account statement
    Statement { tax_id: String },

    /// List every account in creation order
    ListAccounts,
}

impl Operation {
    /// Short name used in logs and script files
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateClient { .. } => "new_client",
            Operation::CreateAccount { .. } => "new_account",
            Operation::Deposit { .. } => "deposit",
            Operation::Withdraw { .. } => "withdraw",
            Operation::Statement { .. } => "statement",
            Operation::ListAccounts => "list_accounts",
        }
    }
}

/// Result of a successful operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ClientCreated(ClientId),
    AccountCreated {
        number: AccountNumber,
        kind: AccountKind,
    },
    Deposited { balance: Decimal },
    Withdrew { balance: Decimal },
    Statement(String),
    Accounts(Vec<AccountSummary>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::ClientCreated(id) => write!(f, "Client {} created.", id),
            Outcome::AccountCreated { number, kind } => {
                write!(f, "{} account {} created.", kind, number)
            }
            Outcome::Deposited { balance } => {
                write!(f, "Deposit completed. Balance: {}", format_money(*balance))
            }
            Outcome::Withdrew { balance } => {
                write!(f, "Withdrawal completed. Balance: {}", format_money(*balance))
            }
            Outcome::Statement(statement) => write!(f, "{}", statement),
            Outcome::Accounts(accounts) if accounts.is_empty() => {
                write!(f, "No accounts registered.")
            }
            Outcome::Accounts(accounts) => {
                let lines: Vec<String> = accounts.iter().map(ToString::to_string).collect();
                write!(f, "{}", lines.join("\n"))
            }
        }
    }
}
