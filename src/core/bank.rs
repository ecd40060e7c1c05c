//! Client and account registry
//!
//! This module provides the `Bank` struct, the single-actor registry of
//! clients and accounts.
//!
//! The Bank is responsible for:
//! - Registering clients, unique by tax id
//! - Opening accounts with sequential numbers
//! - Looking up clients and accounts
//! - Routing deposits, withdrawals and statements by tax id

use crate::config::BankConfig;
use crate::core::account::Account;
use crate::types::{
    AccountNumber, AccountSummary, BankError, CheckingPolicy, Client, ClientId, StandardPolicy,
    WithdrawalPolicy,
};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Registry of clients and accounts
///
/// Lookups are linear scans; the registry is expected to stay small.
#[derive(Debug)]
pub struct Bank {
    branch_code: String,
    checking_policy: CheckingPolicy,
    standard_policy: StandardPolicy,
    clients: Vec<Arc<Client>>,
    accounts: Vec<Account>,
}

impl Bank {
    /// Create an empty bank with the default configuration
    pub fn new() -> Self {
        Self::with_config(&BankConfig::default())
    }

    /// Create an empty bank using the branch code and account rules of `config`
    pub fn with_config(config: &BankConfig) -> Self {
        Bank {
            branch_code: config.branch_code.clone(),
            checking_policy: config.checking_policy(),
            standard_policy: config.standard_policy(),
            clients: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    /// Register a new client
    ///
    /// # Errors
    ///
    /// - `DuplicateClient` if a client with the same tax id exists
    pub fn create_client(
        &mut self,
        name: &str,
        tax_id: &str,
        address: &str,
    ) -> Result<ClientId, BankError> {
        self.register_client(Client::new(name, tax_id, address))
    }

    /// Register a fully built client (e.g. one carrying a birth date)
    ///
    /// The registry assigns the client id.
    ///
    /// # Errors
    ///
    /// - `DuplicateClient` if a client with the same tax id exists
    pub fn register_client(&mut self, client: Client) -> Result<ClientId, BankError> {
        if self.find_client(client.tax_id()).is_some() {
            return Err(BankError::duplicate_client(client.tax_id()));
        }

        let id = next_id(self.clients.len());
        let client = client.with_id(id);
        tracing::debug!(client = id, tax_id = client.tax_id(), "Client registered");
        self.clients.push(Arc::new(client));

        Ok(id)
    }

    /// Find a client by tax id
    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        let tax_id = tax_id.trim();
        self.clients
            .iter()
            .find(|client| client.tax_id() == tax_id)
            .map(Arc::as_ref)
    }

    /// Open a checking account with the bank's configured rules
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` if no client has this tax id
    pub fn create_checking_account(&mut self, tax_id: &str) -> Result<AccountNumber, BankError> {
        let policy = WithdrawalPolicy::Checking(self.checking_policy);
        self.open_account(tax_id, policy)
    }

    /// Open a standard account with the bank's configured rules
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` if no client has this tax id
    pub fn create_standard_account(&mut self, tax_id: &str) -> Result<AccountNumber, BankError> {
        let policy = WithdrawalPolicy::Standard(self.standard_policy);
        self.open_account(tax_id, policy)
    }

    /// Open an account with an explicit withdrawal policy
    ///
    /// The account number is the number of existing accounts plus one.
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` if no client has this tax id
    pub fn open_account(
        &mut self,
        tax_id: &str,
        policy: WithdrawalPolicy,
    ) -> Result<AccountNumber, BankError> {
        let holder = self
            .clients
            .iter()
            .find(|client| client.tax_id() == tax_id.trim())
            .cloned()
            .ok_or_else(|| BankError::client_not_found(tax_id))?;

        let number = next_id(self.accounts.len());
        tracing::debug!(
            account = number,
            tax_id = holder.tax_id(),
            kind = policy.label(),
            "Account opened"
        );
        self.accounts
            .push(Account::new(self.branch_code.clone(), number, holder, policy));

        Ok(number)
    }

    /// Account summaries in creation order
    ///
    /// The iterator is lazy; call again to restart from the first account.
    pub fn list_accounts(&self) -> impl Iterator<Item = AccountSummary> + '_ {
        self.accounts.iter().map(Account::summary)
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Get an account by number
    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    /// Get a mutable account by number
    pub fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }

    /// First account held by the client with this tax id
    pub fn find_account(&self, tax_id: &str) -> Option<&Account> {
        let tax_id = tax_id.trim();
        self.accounts
            .iter()
            .find(|account| account.holder().tax_id() == tax_id)
    }

    fn find_account_mut(&mut self, tax_id: &str) -> Result<&mut Account, BankError> {
        let key = tax_id.trim();
        self.accounts
            .iter_mut()
            .find(|account| account.holder().tax_id() == key)
            .ok_or_else(|| BankError::account_not_found(tax_id))
    }

    /// Whether account `number` exists and belongs to the client with this tax id
    pub fn holds_account(&self, tax_id: &str, number: AccountNumber) -> bool {
        self.account(number)
            .is_some_and(|account| account.holder().tax_id() == tax_id.trim())
    }

    /// Deposit into the client's first account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the client holds no account
    /// - `InvalidAmount` if the amount is not positive
    pub fn deposit(&mut self, tax_id: &str, amount: Decimal) -> Result<(), BankError> {
        self.find_account_mut(tax_id)?.deposit(amount)
    }

    /// Withdraw from the client's first account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the client holds no account
    /// - Any withdrawal error of the account's policy
    pub fn withdraw(&mut self, tax_id: &str, amount: Decimal) -> Result<(), BankError> {
        self.find_account_mut(tax_id)?.withdraw(amount)
    }

    /// Statement of the client's first account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the client holds no account
    pub fn statement(&self, tax_id: &str) -> Result<String, BankError> {
        self.find_account(tax_id)
            .map(Account::statement)
            .ok_or_else(|| BankError::account_not_found(tax_id))
    }

    /// Balance of the client's first account
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the client holds no account
    pub fn balance(&self, tax_id: &str) -> Result<Decimal, BankError> {
        self.find_account(tax_id)
            .map(Account::balance)
            .ok_or_else(|| BankError::account_not_found(tax_id))
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequential identifier for the item following `count` existing ones
pub(crate) fn next_id(count: usize) -> u32 {
    u32::try_from(count).map_or(u32::MAX, |n| n.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;
    use rstest::rstest;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn bank_with_client() -> Bank {
        let mut bank = Bank::new();
        bank.create_client("Ana Souza", "111", "Rua A, 1").unwrap();
        bank
    }

    #[test]
    fn test_new_creates_empty_bank() {
        let bank = Bank::new();
        assert_eq!(bank.client_count(), 0);
        assert_eq!(bank.account_count(), 0);
        assert_eq!(bank.list_accounts().count(), 0);
        assert_eq!(bank.branch_code(), "0001");
    }

    #[test]
    fn test_create_client_assigns_sequential_ids() {
        let mut bank = Bank::new();

        assert_eq!(bank.create_client("Ana", "111", "Rua A"), Ok(1));
        assert_eq!(bank.create_client("Bruno", "222", "Rua B"), Ok(2));

        let client = bank.find_client("222").unwrap();
        assert_eq!(client.id(), 2);
        assert_eq!(client.name(), "Bruno");
    }

    #[rstest]
    #[case::same_tax_id("111")]
    #[case::padded_tax_id(" 111 ")]
    fn test_duplicate_client_rejected(#[case] tax_id: &str) {
        let mut bank = bank_with_client();

        let result = bank.create_client("Other", tax_id, "Rua Z");

        assert_eq!(result, Err(BankError::duplicate_client("111")));
        assert_eq!(bank.client_count(), 1);
        assert_eq!(bank.find_client("111").unwrap().name(), "Ana Souza");
    }

    #[test]
    fn test_register_client_keeps_birth_date() {
        let mut bank = Bank::new();
        let client = Client::new("Ana", "111", "Rua A").with_birth_date("01-02-1990");

        bank.register_client(client).unwrap();

        assert_eq!(
            bank.find_client("111").and_then(Client::birth_date),
            Some("01-02-1990")
        );
    }

    #[test]
    fn test_find_client_unknown() {
        let bank = bank_with_client();
        assert!(bank.find_client("999").is_none());
    }

    #[test]
    fn test_create_checking_account_for_unknown_client() {
        let mut bank = Bank::new();

        let result = bank.create_checking_account("999");

        assert_eq!(result, Err(BankError::client_not_found("999")));
        assert_eq!(bank.account_count(), 0);
    }

    #[test]
    fn test_account_numbers_are_sequential() {
        let mut bank = bank_with_client();
        bank.create_client("Bruno", "222", "Rua B").unwrap();

        assert_eq!(bank.create_checking_account("111"), Ok(1));
        assert_eq!(bank.create_checking_account("222"), Ok(2));
        assert_eq!(bank.create_checking_account("111"), Ok(3));

        let numbers: Vec<AccountNumber> = bank.list_accounts().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_accounts_is_restartable() {
        let mut bank = bank_with_client();
        bank.create_checking_account("111").unwrap();
        bank.create_standard_account("111").unwrap();

        let first: Vec<AccountSummary> = bank.list_accounts().collect();
        let second: Vec<AccountSummary> = bank.list_accounts().collect();

        assert_eq!(first, second);
        assert_eq!(first[0].kind, "checking");
        assert_eq!(first[1].kind, "standard");
        assert_eq!(first[0].holder_name, "Ana Souza");
    }

    #[test]
    fn test_checking_account_uses_configured_policy() {
        let config = BankConfig::new("0042", dec(100), 1);
        let mut bank = Bank::with_config(&config);
        bank.create_client("Ana", "111", "Rua A").unwrap();
        let number = bank.create_checking_account("111").unwrap();

        let account = bank.account(number).unwrap();
        assert_eq!(account.branch_code(), "0042");
        assert_eq!(
            account.policy(),
            &WithdrawalPolicy::Checking(CheckingPolicy::new(dec(100), 1))
        );
    }

    #[test]
    fn test_standard_account_uses_configured_policy() {
        let config = BankConfig::new("0042", dec(100), 2).with_withdrawal_limit(dec(50));
        let mut bank = Bank::with_config(&config);
        bank.create_client("Ana", "111", "Rua A").unwrap();
        let number = bank.create_standard_account("111").unwrap();
        bank.deposit("111", dec(200)).unwrap();

        assert_eq!(
            bank.account(number).unwrap().policy(),
            &WithdrawalPolicy::Standard(StandardPolicy::new(dec(50), 2))
        );
        assert_eq!(
            bank.withdraw("111", dec(51)),
            Err(BankError::withdrawal_limit_exceeded(number, dec(50), dec(51)))
        );
        bank.withdraw("111", dec(50)).unwrap();
        assert_eq!(bank.balance("111"), Ok(dec(150)));
    }

    #[test]
    fn test_operations_without_account() {
        let mut bank = bank_with_client();

        assert_eq!(
            bank.deposit("111", dec(10)),
            Err(BankError::account_not_found("111"))
        );
        assert_eq!(
            bank.withdraw("111", dec(10)),
            Err(BankError::account_not_found("111"))
        );
        assert_eq!(
            bank.statement("111"),
            Err(BankError::account_not_found("111"))
        );
        assert_eq!(
            bank.statement("999"),
            Err(BankError::account_not_found("999"))
        );
    }

    #[test]
    fn test_deposit_and_withdraw_by_tax_id() {
        let mut bank = bank_with_client();
        bank.create_checking_account("111").unwrap();

        bank.deposit("111", dec(100)).unwrap();
        bank.withdraw("111", dec(50)).unwrap();

        assert_eq!(bank.balance("111"), Ok(dec(50)));
        let kinds: Vec<TransactionKind> = bank
            .find_account("111")
            .unwrap()
            .history()
            .iter()
            .map(|t| t.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![TransactionKind::Deposit, TransactionKind::Withdrawal]
        );

        let result = bank.withdraw("111", dec(9999));
        assert!(matches!(result, Err(BankError::OverdraftExceeded { .. })));
        assert_eq!(bank.balance("111"), Ok(dec(50)));
    }

    #[test]
    fn test_operations_route_to_first_account() {
        let mut bank = bank_with_client();
        let first = bank.create_checking_account("111").unwrap();
        let second = bank.create_checking_account("111").unwrap();

        bank.deposit("111", dec(30)).unwrap();

        assert_eq!(bank.account(first).unwrap().balance(), dec(30));
        assert_eq!(bank.account(second).unwrap().balance(), Decimal::ZERO);
    }

    #[test]
    fn test_account_mut_by_number() {
        let mut bank = bank_with_client();
        bank.create_checking_account("111").unwrap();
        let second = bank.create_checking_account("111").unwrap();

        bank.account_mut(second).unwrap().deposit(dec(5)).unwrap();

        assert_eq!(bank.account(second).unwrap().balance(), dec(5));
        assert!(bank.account_mut(99).is_none());
    }

    #[test]
    fn test_holds_account() {
        let mut bank = bank_with_client();
        bank.create_client("Bruno", "222", "Rua B").unwrap();
        let number = bank.create_checking_account("111").unwrap();

        assert!(bank.holds_account("111", number));
        assert!(!bank.holds_account("222", number));
        assert!(!bank.holds_account("111", 42));
    }

    #[test]
    fn test_statement_after_deposit() {
        let mut bank = bank_with_client();
        bank.create_checking_account("111").unwrap();
        bank.deposit("111", dec(100)).unwrap();

        let statement = bank.statement("111").unwrap();

        assert_eq!(statement.lines().count(), 2);
        assert!(statement.contains("Deposit: R$ 100.00"));
        assert!(statement.ends_with("Balance: R$ 100.00"));
    }
}
