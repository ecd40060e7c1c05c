//! Bank Console CLI
//!
//! Command-line front end for an in-memory bank of clients and accounts.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --registry shared
//! cargo run -- --mode script session.csv > accounts.csv
//! cargo run -- --mode script --overdraft-limit 1000 --max-daily-withdrawals 5 < session.csv
//! cargo run -- --withdrawal-limit 300
//! ```
//!
//! In interactive mode the program shows a menu on stdout and reads choices
//! from stdin (or from SCRIPT when given). In script mode it replays the
//! operations of the CSV script and writes the final account summaries to
//! stdout.
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `bank_console=warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script not found or not readable, output not writable, etc.)

use bank_console::cli::{self, CliArgs};
use bank_console::runner;
use bank_console::types::BankError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_console=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), BankError> {
    let config = args.to_bank_config();
    let mut bank = runner::create_registry(args.registry, &config);
    let runner = runner::create_runner(args.mode);

    let mut input: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|e| BankError::Io {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut output = io::stdout().lock();
    runner.run(bank.as_mut(), input.as_mut(), &mut output)
}
