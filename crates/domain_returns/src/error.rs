//! Returns domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when validating or projecting an investment
///
/// All variants are detected locally, before any network call, and are
/// recoverable by correcting the input.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Requested {requested} units is below the minimum of {minimum}")]
    BelowMinimum { requested: u32, minimum: u32 },

    #[error("Requested {requested} units exceeds the {available} units available")]
    ExceedsAvailable { requested: u32, available: u32 },

    #[error("Unit price must be positive, got {0}")]
    InvalidUnitPrice(Decimal),

    #[error("Invalid {field} rate: {value}")]
    InvalidRate { field: &'static str, value: Decimal },

    #[error("Locking period must be at least one year, got {years}")]
    InvalidLockingPeriod { years: u32 },

    #[error("Minimum units ({min}) must be at least 1 and no greater than available units ({available})")]
    InvalidUnitBounds { min: u32, available: u32 },

    #[error("Invalid penalty schedule: {0}")]
    InvalidPenaltySchedule(String),
}
