//! Core traits for bank registries
//!
//! This module defines the operation contract consumed by the front ends, so
//! the single-actor `Bank` and the thread-safe `SharedBank` can be used
//! interchangeably.

use crate::core::bank::Bank;
use crate::types::{AccountKind, AccountNumber, AccountSummary, BankError, Client, ClientId};
use rust_decimal::Decimal;

/// Operations a front end may perform on a bank registry
///
/// Implementations receive already-parsed values and return structured
/// results; all text rendering is left to the caller.
pub trait BankOperations {
    /// Register a client unique by tax id
    fn create_client(
        &mut self,
        name: &str,
        tax_id: &str,
        address: &str,
        birth_date: Option<&str>,
    ) -> Result<ClientId, BankError>;

    /// Open an account of `kind` for an existing client
    fn create_account(
        &mut self,
        tax_id: &str,
        kind: AccountKind,
    ) -> Result<AccountNumber, BankError>;

    /// Deposit into the client's account
    fn deposit(&mut self, tax_id: &str, amount: Decimal) -> Result<(), BankError>;

    /// Withdraw from the client's account
    fn withdraw(&mut self, tax_id: &str, amount: Decimal) -> Result<(), BankError>;

    /// Render the statement of the client's account
    fn statement(&self, tax_id: &str) -> Result<String, BankError>;

    /// Current balance of the client's account
    fn balance(&self, tax_id: &str) -> Result<Decimal, BankError>;

    /// Summaries of all accounts in creation order
    fn list_accounts(&self) -> Vec<AccountSummary>;
}

impl BankOperations for Bank {
    fn create_client(
        &mut self,
        name: &str,
        tax_id: &str,
        address: &str,
        birth_date: Option<&str>,
    ) -> Result<ClientId, BankError> {
        let client = Client::new(name, tax_id, address);
        let client = match birth_date {
            Some(date) => client.with_birth_date(date),
            None => client,
        };
        self.register_client(client)
    }

    fn create_account(
        &mut self,
        tax_id: &str,
        kind: AccountKind,
    ) -> Result<AccountNumber, BankError> {
        match kind {
            AccountKind::Checking => self.create_checking_account(tax_id),
            AccountKind::Standard => self.create_standard_account(tax_id),
        }
    }

    fn deposit(&mut self, tax_id: &str, amount: Decimal) -> Result<(), BankError> {
        Bank::deposit(self, tax_id, amount)
    }

    fn withdraw(&mut self, tax_id: &str, amount: Decimal) -> Result<(), BankError> {
        Bank::withdraw(self, tax_id, amount)
    }

    fn statement(&self, tax_id: &str) -> Result<String, BankError> {
        Bank::statement(self, tax_id)
    }

    fn balance(&self, tax_id: &str) -> Result<Decimal, BankError> {
        Bank::balance(self, tax_id)
    }

    fn list_accounts(&self) -> Vec<AccountSummary> {
        Bank::list_accounts(self).collect()
    }
}
