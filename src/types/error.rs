//! Error types for the bank console
//!
//! This module defines every error an operation on the bank can report.
//! Errors carry enough context to be rendered directly by the console.
//!
//! # Error Categories
//!
//! - **Amount Errors**: Non-positive amounts
//! - **Balance Errors**: Insufficient funds, overdraft exceeded, per-withdrawal limit
//!   exceeded, daily withdrawal cap reached
//! - **Registry Errors**: Unknown client, duplicate client, client without an account
//! - **Input Errors**: I/O and script parsing failures (front ends only)

use crate::types::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank
///
/// Every fallible operation returns this type. All domain variants are
/// recoverable: the caller reports them and carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Amount is zero or negative
    #[error("Invalid amount {amount}: amounts must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Checking account already made its allowed number of withdrawals
    #[error("Account {account} reached its limit of {limit} withdrawals")]
    DailyLimitExceeded {
        /// Account number
        account: AccountNumber,
        /// Configured maximum number of withdrawals
        limit: u32,
    },

    /// Withdrawal larger than balance plus overdraft limit
    #[error("Overdraft exceeded for account {account}: available {available}, requested {requested}")]
    OverdraftExceeded {
        /// Account number
        account: AccountNumber,
        /// Balance plus overdraft limit
        available: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Single withdrawal above the per-withdrawal limit of a standard account
    #[error("Withdrawal of {requested} from account {account} exceeds the limit of {limit}")]
    WithdrawalLimitExceeded {
        /// Account number
        account: AccountNumber,
        /// Largest amount allowed per withdrawal
        limit: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// No client registered under the tax id
    #[error("Client with tax id {tax_id} not found")]
    ClientNotFound {
        /// The tax id that was looked up
        tax_id: String,
    },

    /// A client with the tax id is already registered
    #[error("Client with tax id {tax_id} already exists")]
    DuplicateClient {
        /// The duplicated tax id
        tax_id: String,
    },

    /// The client exists but holds no account
    #[error("No account found for tax id {tax_id}")]
    AccountNotFound {
        /// The tax id that was looked up
        tax_id: String,
    },

    /// I/O error while reading input or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Script record could not be parsed
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a DailyLimitExceeded error
    pub fn daily_limit_exceeded(account: AccountNumber, limit: u32) -> Self {
        BankError::DailyLimitExceeded { account, limit }
    }

    /// Create an OverdraftExceeded error
    pub fn overdraft_exceeded(account: AccountNumber, available: Decimal, requested: Decimal) -> Self {
        BankError::OverdraftExceeded {
            account,
            available,
            requested,
        }
    }

    /// Create a WithdrawalLimitExceeded error
    pub fn withdrawal_limit_exceeded(account: AccountNumber, limit: Decimal, requested: Decimal) -> Self {
        BankError::WithdrawalLimitExceeded {
            account,
            limit,
            requested,
        }
    }

    /// Create a ClientNotFound error
    pub fn client_not_found(tax_id: &str) -> Self {
        BankError::ClientNotFound {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create a DuplicateClient error
    pub fn duplicate_client(tax_id: &str) -> Self {
        BankError::DuplicateClient {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(tax_id: &str) -> Self {
        BankError::AccountNotFound {
            tax_id: tax_id.to_string(),
        }
    }

    /// Create a Parse error
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        BankError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Whether the error comes from the I/O boundary rather than the bank
    pub fn is_fatal(&self) -> bool {
        matches!(self, BankError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::invalid_amount(
        BankError::InvalidAmount { amount: Decimal::new(-5, 0) },
        "Invalid amount -5: amounts must be positive"
    )]
    #[case::insufficient_funds(
        BankError::InsufficientFunds { account: 1, balance: Decimal::new(5000, 2), requested: Decimal::new(10000, 2) },
        "Insufficient funds in account 1: balance 50.00, requested 100.00"
    )]
    #[case::daily_limit(
        BankError::DailyLimitExceeded { account: 2, limit: 3 },
        "Account 2 reached its limit of 3 withdrawals"
    )]
    #[case::overdraft(
        BankError::OverdraftExceeded { account: 1, available: Decimal::new(550, 0), requested: Decimal::new(9999, 0) },
        "Overdraft exceeded for account 1: available 550, requested 9999"
    )]
    #[case::withdrawal_limit(
        BankError::WithdrawalLimitExceeded { account: 3, limit: Decimal::new(500, 0), requested: Decimal::new(50001, 2) },
        "Withdrawal of 500.01 from account 3 exceeds the limit of 500"
    )]
    #[case::client_not_found(
        BankError::ClientNotFound { tax_id: "123".to_string() },
        "Client with tax id 123 not found"
    )]
    #[case::duplicate_client(
        BankError::DuplicateClient { tax_id: "123".to_string() },
        "Client with tax id 123 already exists"
    )]
    #[case::account_not_found(
        BankError::AccountNotFound { tax_id: "123".to_string() },
        "No account found for tax id 123"
    )]
    #[case::parse_with_line(
        BankError::Parse { line: Some(4), message: "unknown operation 'x'".to_string() },
        "Parse error at line 4: unknown operation 'x'"
    )]
    #[case::parse_without_line(
        BankError::Parse { line: None, message: "bad header".to_string() },
        "Parse error: bad header"
    )]
    fn test_error_display(#[case] error: BankError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        BankError::invalid_amount(Decimal::ZERO),
        BankError::InvalidAmount { amount: Decimal::ZERO }
    )]
    #[case::daily_limit(
        BankError::daily_limit_exceeded(7, 3),
        BankError::DailyLimitExceeded { account: 7, limit: 3 }
    )]
    #[case::withdrawal_limit(
        BankError::withdrawal_limit_exceeded(7, Decimal::from(500), Decimal::from(600)),
        BankError::WithdrawalLimitExceeded { account: 7, limit: Decimal::from(500), requested: Decimal::from(600) }
    )]
    #[case::duplicate_client(
        BankError::duplicate_client("42"),
        BankError::DuplicateClient { tax_id: "42".to_string() }
    )]
    #[case::account_not_found(
        BankError::account_not_found("42"),
        BankError::AccountNotFound { tax_id: "42".to_string() }
    )]
    fn test_helper_functions(#[case] result: BankError, #[case] expected: BankError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: BankError = io_error.into();
        assert!(matches!(error, BankError::Io { .. }));
        assert!(error.is_fatal());
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_domain_errors_are_not_fatal() {
        assert!(!BankError::client_not_found("1").is_fatal());
        assert!(!BankError::parse(Some(2), "bad").is_fatal());
    }
}
