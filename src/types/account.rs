//! Account-related types for the bank console
//!
//! This module defines account identifiers, the withdrawal policies an
//! account can carry, and the summary used for listings and exports.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Account number, sequential within a bank starting at 1
pub type AccountNumber = u32;

/// Branch code used when none is configured
pub const DEFAULT_BRANCH_CODE: &str = "0001";

/// Rules of a checking account
///
/// A checking account may be drawn beyond its balance up to
/// `overdraft_limit`, and allows at most `max_daily_withdrawals`
/// withdrawals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    /// Amount beyond the balance a withdrawal request may reach
    pub overdraft_limit: Decimal,

    /// Number of withdrawals allowed
    ///
    /// The counter is never reset while the process lives.
    pub max_daily_withdrawals: u32,
}

impl CheckingPolicy {
    /// Default overdraft limit, in whole currency units
    pub const DEFAULT_OVERDRAFT_LIMIT: i64 = 500;
    pub const DEFAULT_MAX_DAILY_WITHDRAWALS: u32 = 3;

    pub fn new(overdraft_limit: Decimal, max_daily_withdrawals: u32) -> Self {
        CheckingPolicy {
            overdraft_limit,
            max_daily_withdrawals,
        }
    }
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self::new(
            Decimal::from(Self::DEFAULT_OVERDRAFT_LIMIT),
            Self::DEFAULT_MAX_DAILY_WITHDRAWALS,
        )
    }
}

/// Rules of a standard account
///
/// Every single withdrawal is limited to `withdrawal_limit`, the balance is
/// never overdrawn, and at most `max_daily_withdrawals` withdrawals are
/// allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardPolicy {
    /// Largest amount a single withdrawal may take
    pub withdrawal_limit: Decimal,

    /// Number of withdrawals allowed, never reset
    pub max_daily_withdrawals: u32,
}

impl StandardPolicy {
    /// Default per-withdrawal limit, in whole currency units
    pub const DEFAULT_WITHDRAWAL_LIMIT: i64 = 500;

    pub fn new(withdrawal_limit: Decimal, max_daily_withdrawals: u32) -> Self {
        StandardPolicy {
            withdrawal_limit,
            max_daily_withdrawals,
        }
    }
}

impl Default for StandardPolicy {
    fn default() -> Self {
        Self::new(
            Decimal::from(Self::DEFAULT_WITHDRAWAL_LIMIT),
            CheckingPolicy::DEFAULT_MAX_DAILY_WITHDRAWALS,
        )
    }
}

/// Withdrawal policy carried by an account
///
/// `Standard` limits each withdrawal and never overdraws.
/// `Checking` adds an overdraft allowance instead of a per-withdrawal limit.
/// Both cap the number of withdrawals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalPolicy {
    Standard(StandardPolicy),
    Checking(CheckingPolicy),
}

impl WithdrawalPolicy {
    /// Label used in listings and CSV exports
    pub fn label(&self) -> &'static str {
        self.kind().label()
    }

    pub fn kind(&self) -> AccountKind {
        match self {
            WithdrawalPolicy::Standard(_) => AccountKind::Standard,
            WithdrawalPolicy::Checking(_) => AccountKind::Checking,
        }
    }
}

/// Kind of account a client asks for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccountKind {
    #[default]
    Checking,
    Standard,
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Standard => "standard",
        }
    }
}

impl FromStr for AccountKind {
    type Err = String;

    /// Case-insensitive `checking` or `standard`
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "checking" => Ok(AccountKind::Checking),
            "standard" => Ok(AccountKind::Standard),
            _ => Err(format!("Unknown account kind '{}'", value.trim())),
        }
    }
}

/// Renders as `Checking` or `Standard`
impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Checking => write!(f, "Checking"),
            AccountKind::Standard => write!(f, "Standard"),
        }
    }
}

/// Read-only view of an account for listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    #[serde(rename = "branch")]
    pub branch_code: String,

    #[serde(rename = "account")]
    pub number: AccountNumber,

    #[serde(rename = "holder")]
    pub holder_name: String,

    #[serde(rename = "tax_id")]
    pub holder_tax_id: String,

    pub kind: &'static str,

    #[serde(serialize_with = "serialize_balance")]
    pub balance: Decimal,
}

fn serialize_balance<S>(balance: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("{:.2}", balance.round_dp(2)))
}

/// Renders as `Branch: 0001 | Account: 1 | Holder: Ana Souza`
impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Branch: {} | Account: {} | Holder: {}",
            self.branch_code, self.number, self.holder_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_checking_policy() {
        let policy = CheckingPolicy::default();
        assert_eq!(policy.overdraft_limit, Decimal::new(500, 0));
        assert_eq!(policy.max_daily_withdrawals, 3);
    }

    #[test]
    fn test_policy_labels() {
        assert_eq!(
            WithdrawalPolicy::Standard(StandardPolicy::default()).label(),
            "standard"
        );
        assert_eq!(
            WithdrawalPolicy::Checking(CheckingPolicy::default()).label(),
            "checking"
        );
    }

    #[test]
    fn test_default_standard_policy() {
        let policy = StandardPolicy::default();
        assert_eq!(policy.withdrawal_limit, Decimal::from(500));
        assert_eq!(policy.max_daily_withdrawals, 3);
    }

    #[rstest]
    #[case::checking("checking", Ok(AccountKind::Checking))]
    #[case::standard("standard", Ok(AccountKind::Standard))]
    #[case::mixed_case(" Standard ", Ok(AccountKind::Standard))]
    #[case::unknown("savings", Err("Unknown account kind 'savings'".to_string()))]
    fn test_account_kind_from_str(#[case] input: &str, #[case] expected: Result<AccountKind, String>) {
        assert_eq!(input.parse::<AccountKind>(), expected);
    }

    #[test]
    fn test_account_kind_defaults_to_checking() {
        assert_eq!(AccountKind::default(), AccountKind::Checking);
        assert_eq!(AccountKind::Standard.to_string(), "Standard");
    }

    #[test]
    fn test_summary_display() {
        let summary = AccountSummary {
            branch_code: DEFAULT_BRANCH_CODE.to_string(),
            number: 1,
            holder_name: "Ana Souza".to_string(),
            holder_tax_id: "12345678900".to_string(),
            kind: "checking",
            balance: Decimal::ZERO,
        };
        assert_eq!(
            summary.to_string(),
            "Branch: 0001 | Account: 1 | Holder: Ana Souza"
        );
    }
}
