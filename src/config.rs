//! Bank configuration
//!
//! Branch code and default account rules, built from CLI arguments or left
//! at their defaults.

use crate::types::{CheckingPolicy, StandardPolicy, DEFAULT_BRANCH_CODE};
use rust_decimal::Decimal;

/// Configuration of a bank registry
#[derive(Clone, Debug, PartialEq)]
pub struct BankConfig {
    /// Branch code stamped on every account
    pub branch_code: String,
    /// Overdraft limit of new checking accounts
    pub overdraft_limit: Decimal,
    /// Per-withdrawal limit of new standard accounts
    pub withdrawal_limit: Decimal,
    /// Withdrawal cap of new accounts of either kind
    pub max_daily_withdrawals: u32,
}

impl Default for BankConfig {
    fn default() -> Self {
        let policy = CheckingPolicy::default();
        Self {
            branch_code: DEFAULT_BRANCH_CODE.to_string(),
            overdraft_limit: policy.overdraft_limit,
            withdrawal_limit: StandardPolicy::default().withdrawal_limit,
            max_daily_withdrawals: policy.max_daily_withdrawals,
        }
    }
}

impl BankConfig {
    /// Create a BankConfig with custom values
    ///
    /// Invalid values (blank branch code, negative overdraft limit, zero
    /// withdrawal cap) are replaced by their defaults with a warning.
    pub fn new(branch_code: &str, overdraft_limit: Decimal, max_daily_withdrawals: u32) -> Self {
        let default = Self::default();

        let branch_code = if branch_code.trim().is_empty() {
            tracing::warn!(
                default = %default.branch_code,
                "Blank branch code, using default"
            );
            default.branch_code
        } else {
            branch_code.trim().to_string()
        };

        let overdraft_limit = if overdraft_limit < Decimal::ZERO {
            tracing::warn!(
                overdraft_limit = %overdraft_limit,
                default = %default.overdraft_limit,
                "Invalid overdraft limit, using default"
            );
            default.overdraft_limit
        } else {
            overdraft_limit
        };

        let max_daily_withdrawals = if max_daily_withdrawals == 0 {
            tracing::warn!(
                max_daily_withdrawals,
                default = default.max_daily_withdrawals,
                "Invalid withdrawal cap, using default"
            );
            default.max_daily_withdrawals
        } else {
            max_daily_withdrawals
        };

        Self {
            branch_code,
            overdraft_limit,
            max_daily_withdrawals,
            ..default
        }
    }

    /// Set the per-withdrawal limit of standard accounts
    ///
    /// A limit that is not positive is replaced by the default with a warning.
    pub fn with_withdrawal_limit(mut self, withdrawal_limit: Decimal) -> Self {
        if withdrawal_limit <= Decimal::ZERO {
            let default = StandardPolicy::default().withdrawal_limit;
            tracing::warn!(
                withdrawal_limit = %withdrawal_limit,
                default = %default,
                "Invalid withdrawal limit, using default"
            );
            self.withdrawal_limit = default;
        } else {
            self.withdrawal_limit = withdrawal_limit;
        }
        self
    }

    /// Checking rules for accounts opened under this configuration
    pub fn checking_policy(&self) -> CheckingPolicy {
        CheckingPolicy::new(self.overdraft_limit, self.max_daily_withdrawals)
    }

    /// Standard rules for accounts opened under this configuration
    pub fn standard_policy(&self) -> StandardPolicy {
        StandardPolicy::new(self.withdrawal_limit, self.max_daily_withdrawals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = BankConfig::default();
        assert_eq!(config.branch_code, "0001");
        assert_eq!(config.overdraft_limit, Decimal::from(500));
        assert_eq!(config.withdrawal_limit, Decimal::from(500));
        assert_eq!(config.max_daily_withdrawals, 3);
    }

    #[test]
    fn test_custom_values_kept() {
        let config = BankConfig::new(" 0042 ", Decimal::from(100), 5);
        assert_eq!(config.branch_code, "0042");
        assert_eq!(
            config.checking_policy(),
            CheckingPolicy::new(Decimal::from(100), 5)
        );
    }

    #[rstest]
    #[case::blank_branch("  ", Decimal::from(100), 5, BankConfig { branch_code: "0001".into(), overdraft_limit: Decimal::from(100), withdrawal_limit: Decimal::from(500), max_daily_withdrawals: 5 })]
    #[case::negative_overdraft("0002", Decimal::from(-1), 5, BankConfig { branch_code: "0002".into(), overdraft_limit: Decimal::from(500), withdrawal_limit: Decimal::from(500), max_daily_withdrawals: 5 })]
    #[case::zero_cap("0002", Decimal::ZERO, 0, BankConfig { branch_code: "0002".into(), overdraft_limit: Decimal::ZERO, withdrawal_limit: Decimal::from(500), max_daily_withdrawals: 3 })]
    fn test_invalid_values_fall_back(
        #[case] branch: &str,
        #[case] overdraft: Decimal,
        #[case] cap: u32,
        #[case] expected: BankConfig,
    ) {
        assert_eq!(BankConfig::new(branch, overdraft, cap), expected);
    }

    #[rstest]
    #[case::custom(Decimal::from(200), Decimal::from(200))]
    #[case::zero(Decimal::ZERO, Decimal::from(500))]
    #[case::negative(Decimal::from(-1), Decimal::from(500))]
    fn test_withdrawal_limit(#[case] limit: Decimal, #[case] expected: Decimal) {
        let config = BankConfig::new("0001", Decimal::from(100), 2).with_withdrawal_limit(limit);
        assert_eq!(config.standard_policy(), StandardPolicy::new(expected, 2));
    }
}
