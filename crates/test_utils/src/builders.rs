//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. Tests specify only the fields they care about.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, InvestorId, Money, Rate};
use domain_returns::{ListingTerms, PenaltySchedule, ProjectionError};
use domain_wallet::WalletSnapshot;

use crate::fixtures::IdFixtures;

/// Builder for listing terms
pub struct ListingTermsBuilder {
    price_per_unit: Money,
    min_units: u32,
    available_units: u32,
    rental_yield_pct: Decimal,
    appreciation_pct: Decimal,
    locking_period_years: u32,
    penalty_pct: Decimal,
    graduated: Option<PenaltySchedule>,
}

impl Default for ListingTermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingTermsBuilder {
    /// Creates a builder with the reference listing defaults
    pub fn new() -> Self {
        Self {
            price_per_unit: Money::new(dec!(1000), Currency::USD),
            min_units: 1,
            available_units: 1000,
            rental_yield_pct: dec!(8),
            appreciation_pct: dec!(3),
            locking_period_years: 5,
            penalty_pct: dec!(10),
            graduated: None,
        }
    }

    /// Sets the unit price
    pub fn with_unit_price(mut self, price: Money) -> Self {
        self.price_per_unit = price;
        self
    }

    /// Sets the unit bounds
    pub fn with_unit_bounds(mut self, min: u32, available: u32) -> Self {
        self.min_units = min;
        self.available_units = available;
        self
    }

    /// Sets the rental yield percentage
    pub fn with_rental_yield(mut self, pct: Decimal) -> Self {
        self.rental_yield_pct = pct;
        self
    }

    /// Sets the appreciation percentage
    pub fn with_appreciation(mut self, pct: Decimal) -> Self {
        self.appreciation_pct = pct;
        self
    }

    /// Sets the locking period
    pub fn with_locking_period(mut self, years: u32) -> Self {
        self.locking_period_years = years;
        self
    }

    /// Sets the flat penalty percentage
    pub fn with_penalty(mut self, pct: Decimal) -> Self {
        self.penalty_pct = pct;
        self
    }

    /// Attaches a graduated schedule
    pub fn with_graduated(mut self, schedule: PenaltySchedule) -> Self {
        self.graduated = Some(schedule);
        self
    }

    /// Builds the terms
    pub fn build(self) -> Result<ListingTerms, ProjectionError> {
        let terms = ListingTerms::new(
            self.price_per_unit,
            self.min_units,
            self.available_units,
            Rate::from_percentage(self.rental_yield_pct),
            Rate::from_percentage(self.appreciation_pct),
            self.locking_period_years,
            Rate::from_percentage(self.penalty_pct),
        )?;

        Ok(match self.graduated {
            Some(schedule) => terms.with_graduated_penalties(schedule),
            None => terms,
        })
    }
}

/// Builder for wallet snapshots
pub struct WalletSnapshotBuilder {
    investor_id: InvestorId,
    available_balance: Money,
    pending_withdrawals: Money,
    total_deposits: Money,
    total_withdrawals: Money,
}

impl Default for WalletSnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletSnapshotBuilder {
    /// Creates a builder with a funded USD wallet
    pub fn new() -> Self {
        Self {
            investor_id: IdFixtures::investor_id(),
            available_balance: Money::new(dec!(100000), Currency::USD),
            pending_withdrawals: Money::zero(Currency::USD),
            total_deposits: Money::new(dec!(100000), Currency::USD),
            total_withdrawals: Money::zero(Currency::USD),
        }
    }

    /// Sets the investor
    pub fn with_investor(mut self, investor_id: InvestorId) -> Self {
        self.investor_id = investor_id;
        self
    }

    /// Sets the available balance
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.available_balance = balance;
        self
    }

    /// Sets the pending withdrawals
    pub fn with_pending_withdrawals(mut self, pending: Money) -> Self {
        self.pending_withdrawals = pending;
        self
    }

    /// Builds the snapshot
    pub fn build(self) -> WalletSnapshot {
        WalletSnapshot::new(self.investor_id, self.available_balance)
            .with_pending_withdrawals(self.pending_withdrawals)
            .with_totals(self.total_deposits, self.total_withdrawals)
    }
}
