//! Front end module for driving a bank session
//!
//! This module defines the Strategy pattern for complete sessions, from reading
//! operations to rendering their outcomes. This allows the interactive menu and
//! the non-interactive script replay to be selected at runtime, each against
//! either registry implementation.

use crate::cli::{ModeType, RegistryType};
use crate::config::BankConfig;
use crate::core::{Bank, BankOperations, SharedBank};
use crate::types::BankError;
use std::io::{BufRead, Write};

pub mod menu;
pub mod script;

pub use menu::MenuRunner;
pub use script::ScriptRunner;

/// Runner trait for complete bank sessions
///
/// A runner reads operations from `input`, applies them to `bank` and writes
/// whatever the user should see to `output`.
pub trait Runner: Send + Sync {
    /// Run a session until the input is exhausted or the user quits
    ///
    /// # Returns
    ///
    /// * `Ok(())` when the session ended normally, including sessions in
    ///   which individual operations were rejected
    /// * `Err(BankError)` if a fatal I/O error occurred
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the output cannot be
    /// written. Rejected operations are reported and never end the session.
    fn run(
        &self,
        bank: &mut dyn BankOperations,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), BankError>;
}

/// Create a runner for the specified front end
pub fn create_runner(mode: ModeType) -> Box<dyn Runner> {
    match mode {
        ModeType::Interactive => Box::new(MenuRunner),
        ModeType::Script => Box::new(ScriptRunner),
    }
}

/// Create an empty registry of the specified type
pub fn create_registry(registry: RegistryType, config: &BankConfig) -> Box<dyn BankOperations> {
    match registry {
        RegistryType::Local => Box::new(Bank::with_config(config)),
        RegistryType::Shared => Box::new(SharedBank::with_config(config)),
    }
}
