//! Pre-built Test Fixtures
//!
//! Common test data shared across the suite. Fixtures return fresh values
//! per call so tests cannot interfere with each other.

use rust_decimal_macros::dec;

use core_kernel::{Currency, InvestorId, Money, PropertyId, Rate};
use domain_returns::{ListingTerms, PenaltySchedule, PenaltyTier};
use domain_wallet::WalletSnapshot;

/// Money values used across the suite
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The reference unit price: $1,000
    pub fn unit_price() -> Money {
        Money::new(dec!(1000), Currency::USD)
    }

    /// The reference investment: $50,000
    pub fn investment() -> Money {
        Money::new(dec!(50000), Currency::USD)
    }

    /// A comfortable wallet balance: $100,000
    pub fn rich_balance() -> Money {
        Money::new(dec!(100000), Currency::USD)
    }

    /// A balance one cent short of the reference investment
    pub fn short_balance() -> Money {
        Money::new(dec!(49999.99), Currency::USD)
    }
}

/// Listing terms used across the suite
pub struct TermsFixtures;

impl TermsFixtures {
    /// The reference listing: $1,000 units, 8% yield, 3% appreciation,
    /// 5-year lock, 10% flat penalty
    pub fn standard() -> ListingTerms {
        ListingTerms::new(
            MoneyFixtures::unit_price(),
            5,
            500,
            Rate::from_percentage(dec!(8)),
            Rate::from_percentage(dec!(3)),
            5,
            Rate::from_percentage(dec!(10)),
        )
        .expect("standard terms are valid")
    }

    /// The reference listing with the 10/5/0 graduated schedule attached
    pub fn graduated() -> ListingTerms {
        Self::standard().with_graduated_penalties(Self::step_down_schedule())
    }

    /// A 10% -> 5% -> 0% schedule stepping down at years 1, 3, and 5
    pub fn step_down_schedule() -> PenaltySchedule {
        PenaltySchedule::new(vec![
            PenaltyTier::new(1, dec!(10)),
            PenaltyTier::new(3, dec!(5)),
            PenaltyTier::new(5, dec!(0)),
        ])
        .expect("step-down schedule is valid")
    }
}

/// Wallet fixtures
pub struct WalletFixtures;

impl WalletFixtures {
    /// A funded wallet for a fresh investor
    pub fn funded() -> WalletSnapshot {
        WalletSnapshot::new(InvestorId::new(), MoneyFixtures::rich_balance())
    }

    /// A wallet that cannot quite afford the reference investment
    pub fn underfunded() -> WalletSnapshot {
        WalletSnapshot::new(InvestorId::new(), MoneyFixtures::short_balance())
    }
}

/// Identifier fixtures
pub struct IdFixtures;

impl IdFixtures {
    pub fn property_id() -> PropertyId {
        PropertyId::new_v7()
    }

    pub fn investor_id() -> InvestorId {
        InvestorId::new_v7()
    }
}
