//! Returns Projection Domain
//!
//! This crate implements the investment-returns projection for fractional
//! property investments: rental income over the locking period, appreciation
//! realized at maturity, and the early-withdrawal outcome under a flat or
//! graduated penalty schedule.
//!
//! # Key Concepts
//!
//! - **Listing terms**: the per-property economics (unit price, unit bounds,
//!   yield and appreciation rates, locking period, penalty schedule)
//! - **Investment parameters**: validated listing terms plus a unit count;
//!   the investment amount is derived, never set directly
//! - **Projection**: a pure, deterministic computation from parameters to
//!   projected values — no I/O at this layer
//! - **Calculator**: the orchestration wrapper that validates input,
//!   delegates to a projection source, and sequences concurrent requests
//!
//! # Numeric Semantics
//!
//! All arithmetic uses decimal money types from `core_kernel`. Percentages
//! are divided by 100 at the point of use, and internal values keep full
//! precision; banker's rounding at 2 decimal places is applied only when a
//! result is prepared for display.

pub mod terms;
pub mod penalty;
pub mod params;
pub mod projector;
pub mod calculator;
pub mod ports;
pub mod error;

pub use terms::ListingTerms;
pub use penalty::{PenaltyTier, PenaltySchedule};
pub use params::InvestmentParameters;
pub use projector::{
    project, project_amount, early_withdrawal_at,
    ProjectionResult, LockingPeriodProjection, MaturityProjection, EarlyWithdrawalProjection,
};
pub use calculator::{InvestmentCalculator, CalculationError, CalculationSequencer, CalculationTicket};
pub use ports::{ReturnsPort, LocalProjector};
pub use error::ProjectionError;

/// Decimal places used when a projection is prepared for display
pub const DISPLAY_DECIMALS: u32 = 2;
