//! Operation dispatch
//!
//! Routes a parsed [`Operation`] to the matching [`BankOperations`] call and
//! turns the result into an [`Outcome`] the front ends can render.

use crate::core::traits::BankOperations;
use crate::types::{BankError, Operation, Outcome};

/// Apply one operation to a bank registry
///
/// # Arguments
///
/// * `bank` - The registry to operate on
/// * `operation` - The operation to apply
///
/// # Returns
///
/// * `Ok(Outcome)` describing what changed or what was read
/// * `Err(BankError)` with the specific reason the operation was rejected
pub fn dispatch(bank: &mut dyn BankOperations, operation: Operation) -> Result<Outcome, BankError> {
    match operation {
        Operation::CreateClient {
            name,
            tax_id,
            address,
            birth_date,
        } => bank
            .create_client(&name, &tax_id, &address, birth_date.as_deref())
            .map(Outcome::ClientCreated),

        Operation::CreateAccount { tax_id, kind } => bank
            .create_account(&tax_id, kind)
            .map(|number| Outcome::AccountCreated { number, kind }),

        Operation::Deposit { tax_id, amount } => {
            bank.deposit(&tax_id, amount)?;
            let balance = bank.balance(&tax_id)?;
            Ok(Outcome::Deposited { balance })
        }

        Operation::Withdraw { tax_id, amount } => {
            bank.withdraw(&tax_id, amount)?;
            let balance = bank.balance(&tax_id)?;
            Ok(Outcome::Withdrew { balance })
        }

        Operation::Statement { tax_id } => bank.statement(&tax_id).map(Outcome::Statement),

        Operation::ListAccounts => Ok(Outcome::Accounts(bank.list_accounts())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bank, SharedBank};
    use crate::types::AccountKind;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn registry(shared: bool) -> Box<dyn BankOperations> {
        if shared {
            Box::new(SharedBank::new())
        } else {
            Box::new(Bank::new())
        }
    }

    fn new_client(tax_id: &str) -> Operation {
        Operation::CreateClient {
            name: "Ana Souza".to_string(),
            tax_id: tax_id.to_string(),
            address: "Rua A, 1".to_string(),
            birth_date: Some("01-02-1990".to_string()),
        }
    }

    fn new_account(tax_id: &str, kind: AccountKind) -> Operation {
        Operation::CreateAccount {
            tax_id: tax_id.to_string(),
            kind,
        }
    }

    #[rstest]
    fn test_full_session(#[values(false, true)] shared: bool) {
        let mut bank = registry(shared);
        let bank = &mut *bank;

        assert_eq!(
            dispatch(bank, new_client("111")),
            Ok(Outcome::ClientCreated(1))
        );
        assert_eq!(
            dispatch(bank, new_account("111", AccountKind::Checking)),
            Ok(Outcome::AccountCreated {
                number: 1,
                kind: AccountKind::Checking
            })
        );
        assert_eq!(
            dispatch(
                bank,
                Operation::Deposit {
                    tax_id: "111".into(),
                    amount: Decimal::from(100)
                }
            ),
            Ok(Outcome::Deposited {
                balance: Decimal::from(100)
            })
        );
        assert_eq!(
            dispatch(
                bank,
                Operation::Withdraw {
                    tax_id: "111".into(),
                    amount: Decimal::from(50)
                }
            ),
            Ok(Outcome::Withdrew {
                balance: Decimal::from(50)
            })
        );

        match dispatch(bank, Operation::Statement { tax_id: "111".into() }) {
            Ok(Outcome::Statement(text)) => {
                assert_eq!(text.lines().count(), 3);
                assert!(text.ends_with("Balance: R$ 50.00"));
            }
            other => panic!("Expected statement, got {:?}", other),
        }

        match dispatch(bank, Operation::ListAccounts) {
            Ok(Outcome::Accounts(accounts)) => {
                assert_eq!(accounts.len(), 1);
                assert_eq!(accounts[0].balance, Decimal::from(50));
            }
            other => panic!("Expected accounts, got {:?}", other),
        }
    }

    #[rstest]
    fn test_errors_are_specific(#[values(false, true)] shared: bool) {
        let mut bank = registry(shared);
        let bank = &mut *bank;

        assert_eq!(
            dispatch(bank, new_account("111", AccountKind::Checking)),
            Err(BankError::client_not_found("111"))
        );

        dispatch(bank, new_client("111")).unwrap();
        assert_eq!(
            dispatch(bank, new_client("111")),
            Err(BankError::duplicate_client("111"))
        );
        assert_eq!(
            dispatch(
                bank,
                Operation::Deposit {
                    tax_id: "111".into(),
                    amount: Decimal::ONE
                }
            ),
            Err(BankError::account_not_found("111"))
        );

        dispatch(bank, new_account("111", AccountKind::Checking)).unwrap();
        assert_eq!(
            dispatch(
                bank,
                Operation::Deposit {
                    tax_id: "111".into(),
                    amount: Decimal::ZERO
                }
            ),
            Err(BankError::invalid_amount(Decimal::ZERO))
        );
    }

    #[rstest]
    fn test_standard_account_limits(#[values(false, true)] shared: bool) {
        let mut bank = registry(shared);
        let bank = &mut *bank;
        dispatch(bank, new_client("111")).unwrap();

        assert_eq!(
            dispatch(bank, new_account("111", AccountKind::Standard)),
            Ok(Outcome::AccountCreated {
                number: 1,
                kind: AccountKind::Standard
            })
        );
        dispatch(
            bank,
            Operation::Deposit {
                tax_id: "111".into(),
                amount: Decimal::from(2000),
            },
        )
        .unwrap();

        let withdraw = |amount: Decimal| Operation::Withdraw {
            tax_id: "111".into(),
            amount,
        };
        assert_eq!(
            dispatch(bank, withdraw(Decimal::new(50001, 2))),
            Err(BankError::withdrawal_limit_exceeded(
                1,
                Decimal::from(500),
                Decimal::new(50001, 2)
            ))
        );
        assert_eq!(
            dispatch(bank, withdraw(Decimal::from(500))),
            Ok(Outcome::Withdrew {
                balance: Decimal::from(1500)
            })
        );
    }
}
