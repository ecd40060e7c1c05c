//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account identifiers, withdrawal policies and summaries
//! - `client`: Client identity records
//! - `operation`: Parsed operations and their outcomes
//! - `transaction`: Transaction records
//! - `error`: Error types for the bank

pub mod account;
pub mod client;
pub mod error;
pub mod operation;
pub mod transaction;

pub use account::{
    AccountKind, AccountNumber, AccountSummary, CheckingPolicy, StandardPolicy, WithdrawalPolicy,
    DEFAULT_BRANCH_CODE,
};
pub use client::{Client, ClientId};
pub use error::BankError;
pub use operation::{Operation, Outcome};
pub use transaction::{format_money, Transaction, TransactionKind};
