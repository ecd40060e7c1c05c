//! CSV format handling for operation scripts and account output
//!
//! This module centralizes all CSV format concerns, providing:
//! - ScriptRecord structure for deserialization
//! - Conversion from script records to operations
//! - Account summary serialization
//!
//! # Script format
//!
//! ```text
//! op,tax_id,name,birth_date,address,amount,kind
//! new_client,12345678900,Ana Souza,01-02-1990,"Rua A, 1",,
//! new_account,12345678900,,,,,
//! new_account,12345678900,,,,,standard
//! deposit,12345678900,,,,100.00,
//! withdraw,12345678900,,,,50,
//! statement,12345678900,,,,,
//! list_accounts,,,,,,
//! ```
//!
//! The `kind` column is optional and only read by `new_account`, where a
//! blank or missing value opens a checking account.

use crate::types::{AccountKind, AccountSummary, BankError, Operation};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Header of the account summary CSV
pub const ACCOUNTS_HEADER: [&str; 6] = ["branch", "account", "holder", "tax_id", "kind", "balance"];

/// CSV record structure for deserialization
///
/// Every column except `op` is optional; which ones are required depends on
/// the operation.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ScriptRecord {
    pub op: String,
    pub tax_id: Option<String>,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub amount: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
}

/// Convert a ScriptRecord to an Operation
///
/// The operation name is case-insensitive. Required columns must be present
/// and non-blank; amounts must parse as decimals (their sign is checked by
/// the bank, not here).
///
/// # Errors
///
/// Returns `BankError::Parse` (without line number) describing the problem.
pub fn convert_script_record(record: ScriptRecord) -> Result<Operation, BankError> {
    let op = record.op.trim().to_lowercase();

    match op.as_str() {
        "new_client" => Ok(Operation::CreateClient {
            name: required(&record.name, "name", &op)?,
            tax_id: required(&record.tax_id, "tax_id", &op)?,
            address: required(&record.address, "address", &op)?,
            birth_date: optional(&record.birth_date),
        }),
        "new_account" => Ok(Operation::CreateAccount {
            tax_id: required(&record.tax_id, "tax_id", &op)?,
            kind: parse_kind(&record.kind)?,
        }),
        "deposit" => Ok(Operation::Deposit {
            tax_id: required(&record.tax_id, "tax_id", &op)?,
            amount: parse_amount(&record.amount, &op)?,
        }),
        "withdraw" | "withdrawal" => Ok(Operation::Withdraw {
            tax_id: required(&record.tax_id, "tax_id", &op)?,
            amount: parse_amount(&record.amount, &op)?,
        }),
        "statement" => Ok(Operation::Statement {
            tax_id: required(&record.tax_id, "tax_id", &op)?,
        }),
        "list_accounts" | "list" => Ok(Operation::ListAccounts),
        _ => Err(BankError::parse(
            None,
            format!("Unknown operation '{}'", record.op),
        )),
    }
}

fn optional(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn required(field: &Option<String>, column: &str, op: &str) -> Result<String, BankError> {
    optional(field)
        .ok_or_else(|| BankError::parse(None, format!("{} requires {}", op, column)))
}

fn parse_amount(field: &Option<String>, op: &str) -> Result<Decimal, BankError> {
    let raw = required(field, "amount", op)?;
    Decimal::from_str(&raw)
        .map_err(|_| BankError::parse(None, format!("Invalid amount '{}' for {}", raw, op)))
}

fn parse_kind(field: &Option<String>) -> Result<AccountKind, BankError> {
    match optional(field) {
        Some(raw) => AccountKind::from_str(&raw).map_err(|message| BankError::parse(None, message)),
        None => Ok(AccountKind::default()),
    }
}

/// Write account summaries in CSV format
///
/// Columns: branch, account, holder, tax_id, kind, balance. Accounts are
/// written in account number order; balances are rounded to two decimal
/// places.
///
/// # Errors
///
/// Returns `BankError::Io` if the output cannot be written.
pub fn write_accounts_csv(
    accounts: &[AccountSummary],
    output: &mut dyn Write,
) -> Result<(), BankError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer
        .write_record(ACCOUNTS_HEADER)
        .map_err(|e| io_error("Failed to write CSV header", e))?;

    let mut sorted = accounts.to_vec();
    sorted.sort_by_key(|summary| summary.number);

    for summary in &sorted {
        writer
            .serialize(summary)
            .map_err(|e| io_error("Failed to write account record", e))?;
    }

    writer.flush()?;

    Ok(())
}

fn io_error(context: &str, error: csv::Error) -> BankError {
    BankError::Io {
        message: format!("{}: {}", context, error),
    }
}
