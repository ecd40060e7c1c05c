//! Bank Console Library
//! # Overview
//!
//! This library provides an in-memory bank of clients and their accounts,
//! driven either by an interactive menu or by a replayed CSV script.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Client, Operation, BankError, etc.)
//! - [`config`] - Branch code and account rules
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::history`] - Append-only transaction history
//!   - [`core::policy`] - Withdrawal rules of standard and checking accounts
//!   - [`core::account`] - Account balance operations and statements
//!   - [`core::bank`] - Single-actor client and account registry
//!   - [`core::shared`] - Thread-safe registry
//! - [`io`] - CSV script parsing and account summary output
//! - [`runner`] - Interactive menu and script replay front ends
//!
//! # Operations
//!
//! - **New client**: Register a client unique by tax id
//! - **New account**: Open a checking or standard account for an existing client
//! - **Deposit**: Credit a positive amount to the client's account
//! - **Withdraw**: Debit within the rules of the account kind
//! - **Statement**: Render the transaction history and balance
//! - **List accounts**: Summaries of every account in creation order
//!
//! # Accounts
//!
//! Each account maintains:
//! - `balance`: Current funds, never negative
//! - `history`: Every successful deposit and withdrawal
//! - `withdrawals_done`: Successful withdrawals, capped by the configured maximum
//!
//! Checking accounts may request up to the overdraft limit beyond the
//! balance. Standard accounts limit every single withdrawal instead.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use config::BankConfig;
pub use core::{dispatch, Account, Bank, BankOperations, History, SharedBank};
pub use io::write_accounts_csv;
pub use types::{
    AccountKind, AccountNumber, AccountSummary, BankError, CheckingPolicy, Client, ClientId,
    Operation, Outcome, StandardPolicy, Transaction, TransactionKind, WithdrawalPolicy,
};
