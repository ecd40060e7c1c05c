//! Script replay runner
//!
//! This module provides a non-interactive implementation of the Runner trait.
//! It orchestrates a session by coordinating between the ScriptReader (for CSV
//! input) and the dispatcher (for business logic).
//!
//! # Design
//!
//! The ScriptRunner focuses on orchestration, delegating:
//! - CSV parsing to `ScriptReader` (iterator interface)
//! - Operation routing to `dispatch`
//! - CSV output to `csv_format::write_accounts_csv` (format handling)
//!
//! Rows are processed one at a time. Malformed rows and rejected operations
//! are logged and skipped; only I/O failures end the replay.

use crate::core::{dispatch, BankOperations};
use crate::io::csv_format::write_accounts_csv;
use crate::io::ScriptReader;
use crate::runner::Runner;
use crate::types::BankError;
use std::io::{BufRead, Write};

/// Script replay front end
///
/// # Examples
///
/// ```no_run
/// use bank_console::core::Bank;
/// use bank_console::runner::{Runner, ScriptRunner};
/// use std::fs::File;
/// use std::io::{self, BufReader};
///
/// let mut bank = Bank::new();
/// let mut input = BufReader::new(File::open("session.csv").unwrap());
/// let mut output = io::stdout();
///
/// ScriptRunner
///     .run(&mut bank, &mut input, &mut output)
///     .expect("Replay failed");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRunner;

impl Runner for ScriptRunner {
    /// Replay every row of the script, then write all accounts as CSV
    ///
    /// # Error Handling
    ///
    /// Fatal errors (unreadable input, unwritable output) are returned
    /// immediately. Row errors are logged as warnings and the replay continues.
    fn run(
        &self,
        bank: &mut dyn BankOperations,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), BankError> {
        for result in ScriptReader::from_reader(input) {
            let operation = match result {
                Ok(operation) => operation,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed script row");
                    continue;
                }
            };

            let name = operation.name();
            match dispatch(bank, operation) {
                Ok(outcome) => tracing::info!(operation = name, "{}", outcome),
                Err(e) => tracing::warn!(operation = name, error = %e, "Operation rejected"),
            }
        }

        write_accounts_csv(&bank.list_accounts(), output)
    }
}
