//! Thread-safe bank registry
//!
//! This module provides the `SharedBank` struct, a registry that can be shared
//! across threads behind an `Arc`.
//!
//! # Design
//!
//! Two exclusion scopes are used:
//! - One `Mutex` over the registry (client list, account ownership, number
//!   allocation), taken for client and account creation and for lookups
//! - One `DashMap` entry guard per account, taken for balance mutations
//!
//! The registry lock is released before an account is mutated, so deposits
//! and withdrawals on different accounts never wait on each other.

use crate::config::BankConfig;
use crate::core::account::Account;
use crate::core::bank::next_id;
use crate::core::traits::BankOperations;
use crate::types::{
    AccountKind, AccountNumber, AccountSummary, BankError, CheckingPolicy, Client, ClientId,
    StandardPolicy, WithdrawalPolicy,
};
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Registry {
    clients: Vec<Arc<Client>>,
    /// Account numbers with their holder's tax id, in creation order
    owners: Vec<(AccountNumber, String)>,
}

impl Registry {
    fn find_client(&self, tax_id: &str) -> Option<&Arc<Client>> {
        self.clients.iter().find(|client| client.tax_id() == tax_id)
    }

    fn first_account_of(&self, tax_id: &str) -> Option<AccountNumber> {
        self.owners
            .iter()
            .find(|(_, owner)| owner == tax_id)
            .map(|(number, _)| *number)
    }
}

/// Thread-safe registry of clients and accounts
#[derive(Debug)]
pub struct SharedBank {
    branch_code: String,
    checking_policy: CheckingPolicy,
    standard_policy: StandardPolicy,
    registry: Mutex<Registry>,
    accounts: DashMap<AccountNumber, Account>,
}

impl SharedBank {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(&BankConfig::default())
    }

    /// Create an empty registry using the branch code and account rules of `config`
    pub fn with_config(config: &BankConfig) -> Self {
        SharedBank {
            branch_code: config.branch_code.clone(),
            checking_policy: config.checking_policy(),
            standard_policy: config.standard_policy(),
            registry: Mutex::new(Registry::default()),
            accounts: DashMap::new(),
        }
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // Registry updates are single pushes, so a poisoned lock still holds consistent data
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a client
    ///
    /// # Errors
    ///
    /// - `DuplicateClient` if a client with the same tax id exists
    pub fn register_client(&self, client: Client) -> Result<ClientId, BankError> {
        let mut registry = self.registry();
        if registry.find_client(client.tax_id()).is_some() {
            return Err(BankError::duplicate_client(client.tax_id()));
        }

        let id = next_id(registry.clients.len());
        let client = client.with_id(id);
        tracing::debug!(client = id, tax_id = client.tax_id(), "Client registered");
        registry.clients.push(Arc::new(client));

        Ok(id)
    }

    /// Find a client by tax id
    ///
    /// Returns a shared handle, since the registry lock is released on return.
    pub fn find_client(&self, tax_id: &str) -> Option<Arc<Client>> {
        self.registry().find_client(tax_id.trim()).cloned()
    }

    /// Open an account with an explicit withdrawal policy
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` if no client has this tax id
    pub fn open_account(
        &self,
        tax_id: &str,
        policy: WithdrawalPolicy,
    ) -> Result<AccountNumber, BankError> {
        let mut registry = self.registry();
        let holder = registry
            .find_client(tax_id.trim())
            .cloned()
            .ok_or_else(|| BankError::client_not_found(tax_id))?;

        let number = next_id(registry.owners.len());
        tracing::debug!(
            account = number,
            tax_id = holder.tax_id(),
            kind = policy.label(),
            "Account opened"
        );
        registry.owners.push((number, holder.tax_id().to_string()));
        self.accounts.insert(
            number,
            Account::new(self.branch_code.clone(), number, holder, policy),
        );

        Ok(number)
    }

    /// Open a checking account with the configured rules
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` if no client has this tax id
    pub fn create_checking_account(&self, tax_id: &str) -> Result<AccountNumber, BankError> {
        self.open_account(tax_id, WithdrawalPolicy::Checking(self.checking_policy))
    }

    /// Open a standard account with the configured rules
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` if no client has this tax id
    pub fn create_standard_account(&self, tax_id: &str) -> Result<AccountNumber, BankError> {
        self.open_account(tax_id, WithdrawalPolicy::Standard(self.standard_policy))
    }

    /// Run `f` with exclusive access to the client's first account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the client holds no account
    /// - Whatever `f` returns
    pub fn update<F, T>(&self, tax_id: &str, f: F) -> Result<T, BankError>
    where
        F: FnOnce(&mut Account) -> Result<T, BankError>,
    {
        let number = self
            .registry()
            .first_account_of(tax_id.trim())
            .ok_or_else(|| BankError::account_not_found(tax_id))?;

        let mut entry = self
            .accounts
            .get_mut(&number)
            .ok_or_else(|| BankError::account_not_found(tax_id))?;
        f(entry.value_mut())
    }

    /// Run `f` with shared access to the client's first account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the client holds no account
    pub fn read<F, T>(&self, tax_id: &str, f: F) -> Result<T, BankError>
    where
        F: FnOnce(&Account) -> T,
    {
        let number = self
            .registry()
            .first_account_of(tax_id.trim())
            .ok_or_else(|| BankError::account_not_found(tax_id))?;

        self.accounts
            .get(&number)
            .map(|entry| f(entry.value()))
            .ok_or_else(|| BankError::account_not_found(tax_id))
    }

    /// Snapshot of all account summaries, sorted by account number
    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        let mut summaries: Vec<AccountSummary> = self
            .accounts
            .iter()
            .map(|entry| entry.value().summary())
            .collect();
        summaries.sort_by_key(|summary| summary.number);
        summaries
    }

    pub fn client_count(&self) -> usize {
        self.registry().clients.len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl Default for SharedBank {
    fn default() -> Self {
        Self::new()
    }
}

impl BankOperations for SharedBank {
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
        self.update(tax_id, |account| account.deposit(amount))
    }

    fn withdraw(&mut self, tax_id: &str, amount: Decimal) -> Result<(), BankError> {
        self.update(tax_id, |account| account.withdraw(amount))
    }

    fn statement(&self, tax_id: &str) -> Result<String, BankError> {
        self.read(tax_id, Account::statement)
    }

    fn balance(&self, tax_id: &str) -> Result<Decimal, BankError> {
        self.read(tax_id, Account::balance)
    }

    fn list_accounts(&self) -> Vec<AccountSummary> {
        SharedBank::list_accounts(self)
    }
}
