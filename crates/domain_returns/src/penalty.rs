//! Graduated early-withdrawal penalty schedules
//!
//! A schedule is an ordered sequence of tiers; the penalty applied to a
//! withdrawal is the one from the highest tier whose threshold does not
//! exceed the elapsed holding time. Before the first threshold the flat
//! listing penalty applies.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Rate;
use crate::error::ProjectionError;

/// One tier of a graduated penalty schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyTier {
    /// Elapsed whole years at which this tier starts to apply
    pub year_threshold: u32,
    /// Penalty rate charged from this tier onward
    pub penalty: Rate,
}

impl PenaltyTier {
    /// Creates a tier from a threshold and a percentage value
    pub fn new(year_threshold: u32, penalty_percentage: rust_decimal::Decimal) -> Self {
        Self {
            year_threshold,
            penalty: Rate::from_percentage(penalty_percentage),
        }
    }
}

/// A validated graduated penalty schedule
///
/// Construction rejects malformed schedules (empty, out-of-order or
/// duplicate thresholds, penalties outside [0, 100]) rather than coalescing
/// them into defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltySchedule {
    tiers: Vec<PenaltyTier>,
}

impl PenaltySchedule {
    /// Creates a schedule from tiers ordered by ascending threshold
    pub fn new(tiers: Vec<PenaltyTier>) -> Result<Self, ProjectionError> {
        if tiers.is_empty() {
            return Err(ProjectionError::InvalidPenaltySchedule(
                "schedule must contain at least one tier".to_string(),
            ));
        }

        for window in tiers.windows(2) {
            if window[1].year_threshold <= window[0].year_threshold {
                return Err(ProjectionError::InvalidPenaltySchedule(format!(
                    "year thresholds must be strictly increasing, found {} after {}",
                    window[1].year_threshold, window[0].year_threshold
                )));
            }
        }

        for tier in &tiers {
            let pct = tier.penalty.as_percentage();
            if pct < dec!(0) || pct > dec!(100) {
                return Err(ProjectionError::InvalidPenaltySchedule(format!(
                    "penalty {}% at year {} is outside [0, 100]",
                    pct, tier.year_threshold
                )));
            }
        }

        Ok(Self { tiers })
    }

    /// Returns the tiers in ascending threshold order
    pub fn tiers(&self) -> &[PenaltyTier] {
        &self.tiers
    }

    /// Resolves the penalty for a withdrawal after `elapsed_years`
    ///
    /// The applicable tier is the last one whose threshold is less than or
    /// equal to the elapsed time. Before the first threshold the flat rate
    /// applies.
    pub fn resolve(&self, elapsed_years: u32, flat: Rate) -> Rate {
        self.tiers
            .iter()
            .take_while(|tier| tier.year_threshold <= elapsed_years)
            .last()
            .map(|tier| tier.penalty)
            .unwrap_or(flat)
    }
}
