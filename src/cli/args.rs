use crate::config::BankConfig;
use crate::types::DEFAULT_BRANCH_CODE;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Console for a small in-memory bank
#[derive(Parser, Debug)]
#[command(name = "bank-console")]
#[command(about = "Manage clients and accounts of an in-memory bank", long_about = None)]
pub struct CliArgs {
    /// Script CSV replayed in script mode
    #[arg(
        value_name = "SCRIPT",
        help = "Path to the operation script (script mode only, stdin when omitted)"
    )]
    pub script: Option<PathBuf>,

    /// How operations are entered
    #[arg(
        long = "mode",
        value_name = "MODE",
        default_value = "interactive",
        help = "Front end: 'interactive' menu or 'script' replay"
    )]
    pub mode: ModeType,

    /// Which registry implementation backs the session
    #[arg(
        long = "registry",
        value_name = "REGISTRY",
        default_value = "local",
        help = "Registry: 'local' single-actor or 'shared' thread-safe"
    )]
    pub registry: RegistryType,

    /// Branch code assigned to new accounts
    #[arg(
        long = "branch",
        value_name = "CODE",
        default_value = DEFAULT_BRANCH_CODE,
        help = "Branch code of new accounts"
    )]
    pub branch: String,

    /// Overdraft limit of new checking accounts
    #[arg(
        long = "overdraft-limit",
        value_name = "AMOUNT",
        value_parser = parse_decimal,
        help = "Overdraft limit of checking accounts (default: 500)"
    )]
    pub overdraft_limit: Option<Decimal>,

    /// Per-withdrawal limit of new standard accounts
    #[arg(
        long = "withdrawal-limit",
        value_name = "AMOUNT",
        value_parser = parse_decimal,
        help = "Largest single withdrawal from a standard account (default: 500)"
    )]
    pub withdrawal_limit: Option<Decimal>,

    /// Withdrawal cap of new accounts
    #[arg(
        long = "max-daily-withdrawals",
        value_name = "N",
        help = "Maximum withdrawals per account (default: 3)"
    )]
    pub max_daily_withdrawals: Option<u32>,
}

/// Available front ends
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeType {
    Interactive,
    Script,
}

/// Available registry implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RegistryType {
    Local,
    Shared,
}

fn parse_decimal(value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim()).map_err(|e| format!("invalid amount '{}': {}", value, e))
}

impl CliArgs {
    /// Create a BankConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults; invalid ones are replaced by
    /// the defaults with a warning (see [`BankConfig::new`]).
    pub fn to_bank_config(&self) -> BankConfig {
        let default = BankConfig::default();
        BankConfig::new(
            &self.branch,
            self.overdraft_limit.unwrap_or(default.overdraft_limit),
            self.max_daily_withdrawals
                .unwrap_or(default.max_daily_withdrawals),
        )
        .with_withdrawal_limit(self.withdrawal_limit.unwrap_or(default.withdrawal_limit))
    }
}
