//! Core business logic module
//!
//! This module contains the bank domain components:
//! - `history` - Append-only transaction history of an account
//! - `policy` - Withdrawal policy evaluation
//! - `account` - Account balance rules, statements and summaries
//! - `bank` - Single-actor client and account registry
//! - `shared` - Thread-safe registry
//! - `traits` - Operation contract shared by both registries
//! - `dispatcher` - Routing of parsed operations to a registry

pub mod account;
pub mod bank;
pub mod dispatcher;
pub mod history;
pub mod policy;
pub mod shared;
pub mod traits;

pub use account::Account;
pub use bank::Bank;
pub use dispatcher::dispatch;
pub use history::History;
pub use shared::SharedBank;
pub use traits::BankOperations;
