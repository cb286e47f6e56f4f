//! Listing terms for a fractional property offering
//!
//! The terms carry everything a projection needs: unit pricing, unit
//! bounds, the yield and appreciation rates, the locking period, and the
//! early-withdrawal penalty arrangement.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};
use crate::error::ProjectionError;
use crate::penalty::PenaltySchedule;

/// The economics of a property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingTerms {
    price_per_unit: Money,
    min_units: u32,
    available_units: u32,
    rental_yield: Rate,
    appreciation: Rate,
    locking_period_years: u32,
    early_withdrawal_penalty: Rate,
    graduated_penalties: Option<PenaltySchedule>,
}

impl ListingTerms {
    /// Creates validated listing terms
    ///
    /// # Errors
    ///
    /// - `InvalidUnitPrice` if the unit price is not positive
    /// - `InvalidUnitBounds` if `min_units` is zero or exceeds `available_units`
    /// - `InvalidRate` if a rate is negative, or the penalty exceeds 100%
    /// - `InvalidLockingPeriod` if the locking period is zero
    pub fn new(
        price_per_unit: Money,
        min_units: u32,
        available_units: u32,
        rental_yield: Rate,
        appreciation: Rate,
        locking_period_years: u32,
        early_withdrawal_penalty: Rate,
    ) -> Result<Self, ProjectionError> {
        if !price_per_unit.is_positive() {
            return Err(ProjectionError::InvalidUnitPrice(price_per_unit.amount()));
        }
        if min_units == 0 || min_units > available_units {
            return Err(ProjectionError::InvalidUnitBounds {
                min: min_units,
                available: available_units,
            });
        }
        if rental_yield.is_negative() {
            return Err(ProjectionError::InvalidRate {
                field: "rental_yield",
                value: rental_yield.as_percentage(),
            });
        }
        if appreciation.is_negative() {
            return Err(ProjectionError::InvalidRate {
                field: "appreciation",
                value: appreciation.as_percentage(),
            });
        }
        if locking_period_years == 0 {
            return Err(ProjectionError::InvalidLockingPeriod {
                years: locking_period_years,
            });
        }
        let penalty_pct = early_withdrawal_penalty.as_percentage();
        if penalty_pct < dec!(0) || penalty_pct > dec!(100) {
            return Err(ProjectionError::InvalidRate {
                field: "early_withdrawal_penalty",
                value: penalty_pct,
            });
        }

        Ok(Self {
            price_per_unit,
            min_units,
            available_units,
            rental_yield,
            appreciation,
            locking_period_years,
            early_withdrawal_penalty,
            graduated_penalties: None,
        })
    }

    /// Attaches a graduated penalty schedule
    pub fn with_graduated_penalties(mut self, schedule: PenaltySchedule) -> Self {
        self.graduated_penalties = Some(schedule);
        self
    }

    /// Price of a single unit
    pub fn price_per_unit(&self) -> Money {
        self.price_per_unit
    }

    /// Minimum units per investment
    pub fn min_units(&self) -> u32 {
        self.min_units
    }

    /// Units still open for investment
    pub fn available_units(&self) -> u32 {
        self.available_units
    }

    /// Annual rental yield rate
    pub fn rental_yield(&self) -> Rate {
        self.rental_yield
    }

    /// Annual appreciation rate
    pub fn appreciation(&self) -> Rate {
        self.appreciation
    }

    /// Locking period in whole years
    pub fn locking_period_years(&self) -> u32 {
        self.locking_period_years
    }

    /// Flat early-withdrawal penalty rate
    pub fn early_withdrawal_penalty(&self) -> Rate {
        self.early_withdrawal_penalty
    }

    /// Graduated penalty schedule, if the listing has one
    pub fn graduated_penalties(&self) -> Option<&PenaltySchedule> {
        self.graduated_penalties.as_ref()
    }

    /// Resolves the penalty rate for a withdrawal after `elapsed_years`
    ///
    /// Uses the graduated schedule when present, else the flat rate.
    pub fn resolve_penalty(&self, elapsed_years: u32) -> Rate {
        match &self.graduated_penalties {
            Some(schedule) => schedule.resolve(elapsed_years, self.early_withdrawal_penalty),
            None => self.early_withdrawal_penalty,
        }
    }
}
