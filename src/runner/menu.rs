//! Interactive menu runner
//!
//! Reads menu choices and prompted values line by line, turns them into
//! [`Operation`]s and prints each outcome. Rejected operations and unparseable
//! input are reported to the user and the menu is shown again; the session
//! ends on `q` or at end of input.
//!
//! Deposits and withdrawals look up the client's account before asking for
//! the amount, so an unknown tax id is reported right away.

use crate::core::{dispatch, BankOperations};
use crate::runner::Runner;
use crate::types::{AccountKind, BankError, Operation};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
[d] Deposit
[w] Withdraw
[s] Statement
[nc] New client
[na] New account
[la] List accounts
[q] Quit
=> ";

/// Interactive menu front end
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuRunner;

/// What the user asked for at the menu
enum Choice {
    Apply(Operation),
    Rejected(&'static str, BankError),
    Invalid(&'static str),
    Quit,
}

struct Session<'a> {
    bank: &'a mut dyn BankOperations,
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl Session<'_> {
    /// Show `label` and read one trimmed line, `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>, BankError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_amount(&mut self, label: &str) -> Result<Option<Result<Decimal, String>>, BankError> {
        Ok(self
            .prompt(label)?
            .map(|raw| Decimal::from_str(&raw).map_err(|_| raw)))
    }

    /// Read the next choice together with the values it needs
    fn next_choice(&mut self) -> Result<Choice, BankError> {
        let Some(choice) = self.prompt(MENU)? else {
            return Ok(Choice::Quit);
        };

        let choice = match choice.to_lowercase().as_str() {
            "d" => self.amount_operation("deposit", "Deposit amount: ", |tax_id, amount| {
                Operation::Deposit { tax_id, amount }
            })?,
            "w" => self.amount_operation("withdraw", "Withdrawal amount: ", |tax_id, amount| {
                Operation::Withdraw { tax_id, amount }
            })?,
            "s" => match self.prompt("Client tax id: ")? {
                Some(tax_id) => Choice::Apply(Operation::Statement { tax_id }),
                None => Choice::Quit,
            },
            "nc" => self.new_client()?,
            "na" => self.new_account()?,
            "la" => Choice::Apply(Operation::ListAccounts),
            "q" => Choice::Quit,
            _ => Choice::Invalid("Invalid option, please try again."),
        };
        Ok(choice)
    }

    fn amount_operation(
        &mut self,
        name: &'static str,
        label: &str,
        build: fn(String, Decimal) -> Operation,
    ) -> Result<Choice, BankError> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(Choice::Quit);
        };
        if let Err(e) = self.bank.balance(&tax_id) {
            return Ok(Choice::Rejected(name, e));
        }
        match self.prompt_amount(label)? {
            Some(Ok(amount)) => Ok(Choice::Apply(build(tax_id, amount))),
            Some(Err(_)) => Ok(Choice::Invalid("Invalid amount, please enter a number.")),
            None => Ok(Choice::Quit),
        }
    }

    fn new_account(&mut self) -> Result<Choice, BankError> {
        let fields = (
            self.prompt("Client tax id for the new account: ")?,
            self.prompt("Account kind (checking/standard) [checking]: ")?,
        );
        let (Some(tax_id), Some(kind)) = fields else {
            return Ok(Choice::Quit);
        };
        let kind = if kind.is_empty() {
            AccountKind::default()
        } else {
            match AccountKind::from_str(&kind) {
                Ok(kind) => kind,
                Err(_) => return Ok(Choice::Invalid("Account kind must be checking or standard.")),
            }
        };

        Ok(Choice::Apply(Operation::CreateAccount { tax_id, kind }))
    }

    fn report_rejection(&mut self, name: &str, error: &BankError) -> Result<(), BankError> {
        tracing::debug!(operation = name, error = %error, "Operation rejected");
        writeln!(self.output, "Operation failed: {}", error)?;
        Ok(())
    }

    fn new_client(&mut self) -> Result<Choice, BankError> {
        let fields = (
            self.prompt("Full name: ")?,
            self.prompt("Tax id (digits only): ")?,
            self.prompt("Birth date (dd-mm-yyyy, optional): ")?,
            self.prompt("Address: ")?,
        );
        let (Some(name), Some(tax_id), Some(birth_date), Some(address)) = fields else {
            return Ok(Choice::Quit);
        };
        if name.is_empty() || tax_id.is_empty() {
            return Ok(Choice::Invalid("Name and tax id are required."));
        }

        Ok(Choice::Apply(Operation::CreateClient {
            name,
            tax_id,
            address,
            birth_date: Some(birth_date).filter(|date| !date.is_empty()),
        }))
    }
}

impl Runner for MenuRunner {
    fn run(
        &self,
        bank: &mut dyn BankOperations,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), BankError> {
        let mut session = Session {
            bank,
            input,
            output,
        };

        loop {
            match session.next_choice()? {
                Choice::Apply(operation) => {
                    let name = operation.name();
                    match dispatch(session.bank, operation) {
                        Ok(outcome) => writeln!(session.output, "{}", outcome)?,
                        Err(e) => session.report_rejection(name, &e)?,
                    }
                }
                Choice::Rejected(name, e) => session.report_rejection(name, &e)?,
                Choice::Invalid(message) => writeln!(session.output, "{}", message)?,
                Choice::Quit => break,
            }
        }

        writeln!(session.output)?;
        session.output.flush()?;
        Ok(())
    }
}
