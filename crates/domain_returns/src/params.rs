//! Validated investment parameters
//!
//! Parameters bind listing terms to a concrete unit count. Construction is
//! the validation boundary: an out-of-bounds unit count never produces
//! parameters, and the investment amount is derived from the unit count and
//! unit price rather than being independently settable.

use serde::{Deserialize, Serialize};

use core_kernel::Money;
use crate::error::ProjectionError;
use crate::terms::ListingTerms;

/// Parameters for a single returns projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    terms: ListingTerms,
    units_requested: u32,
    investment_amount: Money,
}

impl InvestmentParameters {
    /// Creates parameters for `units_requested` units under the given terms
    ///
    /// # Errors
    ///
    /// - `BelowMinimum` if the unit count is below the listing minimum
    /// - `ExceedsAvailable` if the unit count exceeds the available units
    pub fn new(terms: ListingTerms, units_requested: u32) -> Result<Self, ProjectionError> {
        if units_requested < terms.min_units() {
            return Err(ProjectionError::BelowMinimum {
                requested: units_requested,
                minimum: terms.min_units(),
            });
        }
        if units_requested > terms.available_units() {
            return Err(ProjectionError::ExceedsAvailable {
                requested: units_requested,
                available: terms.available_units(),
            });
        }

        let investment_amount = terms
            .price_per_unit()
            .multiply(rust_decimal::Decimal::from(units_requested));

        Ok(Self {
            terms,
            units_requested,
            investment_amount,
        })
    }

    /// The listing terms backing this projection
    pub fn terms(&self) -> &ListingTerms {
        &self.terms
    }

    /// The requested unit count
    pub fn units_requested(&self) -> u32 {
        self.units_requested
    }

    /// The derived investment amount (`units_requested × price_per_unit`)
    pub fn investment_amount(&self) -> Money {
        self.investment_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, Rate};
    use rust_decimal_macros::dec;

    fn terms() -> ListingTerms {
        ListingTerms::new(
            Money::new(dec!(1000), Currency::USD),
            5,
            100,
            Rate::from_percentage(dec!(8)),
            Rate::from_percentage(dec!(3)),
            5,
            Rate::from_percentage(dec!(10)),
        )
        .unwrap()
    }

    #[test]
    fn test_amount_is_derived() {
        let params = InvestmentParameters::new(terms(), 50).unwrap();
        assert_eq!(params.investment_amount().amount(), dec!(50000));
        assert_eq!(params.units_requested(), 50);
    }

    #[test]
    fn test_below_minimum() {
        let result = InvestmentParameters::new(terms(), 4);
        assert!(matches!(
            result,
            Err(ProjectionError::BelowMinimum { requested: 4, minimum: 5 })
        ));
    }

    #[test]
    fn test_exceeds_available() {
        let result = InvestmentParameters::new(terms(), 101);
        assert!(matches!(
            result,
            Err(ProjectionError::ExceedsAvailable { requested: 101, available: 100 })
        ));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(InvestmentParameters::new(terms(), 5).is_ok());
        assert!(InvestmentParameters::new(terms(), 100).is_ok());
    }
}
