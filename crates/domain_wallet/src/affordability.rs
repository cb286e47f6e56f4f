//! Affordability checks for investment submissions
//!
//! These are pre-flight checks only: they run locally, before any network
//! call, and a pass here does not bind the ledger service. Comparisons are
//! exact, at full decimal precision.

use core_kernel::Money;

use crate::error::WalletError;
use crate::snapshot::WalletSnapshot;

/// Returns true if `balance` covers `amount`
///
/// Exact comparison; amounts one minor unit short fail.
pub fn can_afford(amount: &Money, balance: &Money) -> bool {
    amount.currency() == balance.currency() && amount.amount() <= balance.amount()
}

/// The local gate an investment must pass before submission
#[derive(Debug, Clone)]
pub struct AffordabilityPolicy {
    minimum_investment: Money,
}

impl AffordabilityPolicy {
    /// Creates a policy with the platform's minimum investment amount
    pub fn new(minimum_investment: Money) -> Self {
        Self { minimum_investment }
    }

    /// The minimum investment amount
    pub fn minimum_investment(&self) -> Money {
        self.minimum_investment
    }

    /// Checks an amount against the minimum and the wallet balance
    ///
    /// # Errors
    ///
    /// - `CurrencyMismatch` if the wallet holds a different currency
    /// - `BelowMinimumInvestment` if the amount is under the platform minimum
    /// - `InsufficientBalance` if the amount exceeds the available balance
    pub fn check(&self, amount: &Money, snapshot: &WalletSnapshot) -> Result<(), WalletError> {
        if amount.currency() != snapshot.currency() {
            return Err(WalletError::CurrencyMismatch {
                wallet: snapshot.currency().to_string(),
                investment: amount.currency().to_string(),
            });
        }

        if amount.amount() < self.minimum_investment.amount() {
            return Err(WalletError::BelowMinimumInvestment {
                amount: amount.to_string(),
                minimum: self.minimum_investment.to_string(),
            });
        }

        if !can_afford(amount, &snapshot.available_balance) {
            return Err(WalletError::InsufficientBalance {
                amount: amount.to_string(),
                available: snapshot.available_balance.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, InvestorId};
    use rust_decimal_macros::dec;

    fn usd(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    #[test]
    fn test_can_afford_exact_balance() {
        assert!(can_afford(&usd(dec!(50000)), &usd(dec!(50000.00))));
    }

    #[test]
    fn test_cannot_afford_one_cent_short() {
        assert!(!can_afford(&usd(dec!(50000)), &usd(dec!(49999.99))));
    }

    #[test]
    fn test_cannot_afford_across_currencies() {
        let aed = Money::new(dec!(1000000), Currency::AED);
        assert!(!can_afford(&usd(dec!(50000)), &aed));
    }

    #[test]
    fn test_policy_passes_valid_amount() {
        let policy = AffordabilityPolicy::new(usd(dec!(1000)));
        let snapshot = WalletSnapshot::new(InvestorId::new(), usd(dec!(60000)));

        assert!(policy.check(&usd(dec!(50000)), &snapshot).is_ok());
    }

    #[test]
    fn test_policy_rejects_below_minimum() {
        let policy = AffordabilityPolicy::new(usd(dec!(1000)));
        let snapshot = WalletSnapshot::new(InvestorId::new(), usd(dec!(60000)));

        assert!(matches!(
            policy.check(&usd(dec!(999.99)), &snapshot),
            Err(WalletError::BelowMinimumInvestment { .. })
        ));
    }

    #[test]
    fn test_policy_rejects_insufficient_balance() {
        let policy = AffordabilityPolicy::new(usd(dec!(1000)));
        let snapshot = WalletSnapshot::new(InvestorId::new(), usd(dec!(49999.99)));

        assert!(matches!(
            policy.check(&usd(dec!(50000)), &snapshot),
            Err(WalletError::InsufficientBalance { .. })
        ));
    }

    #[test]
    fn test_policy_rejects_currency_mismatch() {
        let policy = AffordabilityPolicy::new(usd(dec!(1000)));
        let snapshot = WalletSnapshot::new(
            InvestorId::new(),
            Money::new(dec!(60000), Currency::AED),
        );

        assert!(matches!(
            policy.check(&usd(dec!(50000)), &snapshot),
            Err(WalletError::CurrencyMismatch { .. })
        ));
    }
}
