//! Investment calculator orchestration
//!
//! The calculator validates a user-supplied unit count against the listing
//! bounds, derives the investment amount, and delegates the projection to a
//! [`ReturnsPort`]. Validation failures never reach the port.
//!
//! Calculations are user-triggered and idempotent, so the calculator does
//! not retry on its own; transient failures are surfaced to the caller.
//! When requests overlap, [`CalculationSequencer`] enforces
//! last-request-wins: a completion is accepted only if no newer request has
//! been issued since it started, so a slow stale response can never
//! overwrite a newer result.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::debug;

use core_kernel::PortError;

use crate::error::ProjectionError;
use crate::params::InvestmentParameters;
use crate::ports::ReturnsPort;
use crate::projector::ProjectionResult;
use crate::terms::ListingTerms;

/// Errors surfaced by a calculation request
#[derive(Debug, Error)]
pub enum CalculationError {
    /// Input failed local validation; no network call was made
    #[error(transparent)]
    Validation(#[from] ProjectionError),

    /// The projection source failed or rejected the request
    #[error(transparent)]
    Service(#[from] PortError),
}

/// Orchestrates calculation requests for one listing
#[derive(Debug, Clone)]
pub struct InvestmentCalculator {
    terms: ListingTerms,
}

impl InvestmentCalculator {
    /// Creates a calculator for the given listing terms
    pub fn new(terms: ListingTerms) -> Self {
        Self { terms }
    }

    /// The listing terms this calculator validates against
    pub fn terms(&self) -> &ListingTerms {
        &self.terms
    }

    /// Validates the unit count and builds projection parameters
    pub fn parameters(&self, units_requested: u32) -> Result<InvestmentParameters, ProjectionError> {
        InvestmentParameters::new(self.terms.clone(), units_requested)
    }

    /// Validates and projects in-process
    pub fn calculate(&self, units_requested: u32) -> Result<ProjectionResult, ProjectionError> {
        let params = self.parameters(units_requested)?;
        Ok(crate::projector::project(&params))
    }

    /// Validates locally, then projects through the given source
    pub async fn calculate_via(
        &self,
        source: &dyn ReturnsPort,
        units_requested: u32,
    ) -> Result<ProjectionResult, CalculationError> {
        let params = self.parameters(units_requested)?;

        match source.project(&params).await {
            Ok(result) => Ok(result),
            Err(err) => {
                debug!(units = units_requested, error = %err, "projection source failed");
                Err(CalculationError::Service(err))
            }
        }
    }
}

/// Ticket identifying one issued calculation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationTicket(u64);

/// Monotonic request sequencing for overlapping calculations
///
/// Only the result carrying the most recently issued ticket is accepted;
/// anything older is discarded as stale.
#[derive(Debug, Default)]
pub struct CalculationSequencer {
    latest: AtomicU64,
}

impl CalculationSequencer {
    /// Creates a sequencer with no requests issued
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new request, superseding all earlier ones
    pub fn begin(&self) -> CalculationTicket {
        CalculationTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns true if the ticket is still the most recent one
    pub fn is_current(&self, ticket: CalculationTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Accepts a completed result only if its ticket is still current
    pub fn accept<T>(&self, ticket: CalculationTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            debug!(ticket = ticket.0, "discarding stale calculation result");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::LocalProjector;
    use core_kernel::{Currency, Money, Rate};
    use rust_decimal_macros::dec;

    fn calculator() -> InvestmentCalculator {
        let terms = ListingTerms::new(
            Money::new(dec!(1000), Currency::USD),
            5,
            100,
            Rate::from_percentage(dec!(8)),
            Rate::from_percentage(dec!(3)),
            5,
            Rate::from_percentage(dec!(10)),
        )
        .unwrap();
        InvestmentCalculator::new(terms)
    }

    #[test]
    fn test_calculate_valid_units() {
        let result = calculator().calculate(50).unwrap();
        assert_eq!(result.investment_amount.amount(), dec!(50000));
    }

    #[test]
    fn test_validation_blocks_below_minimum() {
        let result = calculator().calculate(2);
        assert!(matches!(
            result,
            Err(ProjectionError::BelowMinimum { requested: 2, minimum: 5 })
        ));
    }

    #[tokio::test]
    async fn test_calculate_via_local_source() {
        let calc = calculator();
        let result = calc.calculate_via(&LocalProjector, 50).await.unwrap();
        assert_eq!(result, calc.calculate(50).unwrap());
    }

    #[tokio::test]
    async fn test_calculate_via_rejects_before_reaching_source() {
        let result = calculator().calculate_via(&LocalProjector, 101).await;
        assert!(matches!(
            result,
            Err(CalculationError::Validation(ProjectionError::ExceedsAvailable { .. }))
        ));
    }

    #[test]
    fn test_sequencer_accepts_latest_only() {
        let sequencer = CalculationSequencer::new();

        let first = sequencer.begin();
        let second = sequencer.begin();

        // The slow first request resolves after the second was issued.
        assert_eq!(sequencer.accept(first, "stale"), None);
        assert_eq!(sequencer.accept(second, "fresh"), Some("fresh"));
    }

    #[test]
    fn test_sequencer_single_request_is_current() {
        let sequencer = CalculationSequencer::new();
        let ticket = sequencer.begin();
        assert!(sequencer.is_current(ticket));
    }
}
