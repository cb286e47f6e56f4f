//! Comprehensive tests for domain_returns

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, Rate};

use domain_returns::calculator::{CalculationSequencer, InvestmentCalculator};
use domain_returns::params::InvestmentParameters;
use domain_returns::penalty::{PenaltySchedule, PenaltyTier};
use domain_returns::projector::{early_withdrawal_at, project};
use domain_returns::terms::ListingTerms;
use domain_returns::ProjectionError;

fn usd(amount: Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

fn standard_terms() -> ListingTerms {
    ListingTerms::new(
        usd(dec!(1000)),
        5,
        500,
        Rate::from_percentage(dec!(8)),
        Rate::from_percentage(dec!(3)),
        5,
        Rate::from_percentage(dec!(10)),
    )
    .unwrap()
}

fn graduated_terms() -> ListingTerms {
    standard_terms().with_graduated_penalties(
        PenaltySchedule::new(vec![
            PenaltyTier::new(1, dec!(10)),
            PenaltyTier::new(3, dec!(5)),
            PenaltyTier::new(5, dec!(0)),
        ])
        .unwrap(),
    )
}

// ============================================================================
// Projection Arithmetic Tests
// ============================================================================

mod projection_tests {
    use super::*;

    #[test]
    fn test_reference_scenario_end_to_end() {
        let params = InvestmentParameters::new(standard_terms(), 50).unwrap();
        let result = project(&params);

        assert_eq!(result.investment_amount.amount(), dec!(50000));
        assert_eq!(result.annual_rental_income.amount(), dec!(4000));
        assert_eq!(result.locking_period.years, 5);
        assert_eq!(result.locking_period.projected_value.amount(), dec!(70000));
        assert_eq!(result.at_maturity.rental_yield.amount(), dec!(20000));
        assert_eq!(result.at_maturity.appreciation.amount(), dec!(7500));
        assert_eq!(result.at_maturity.total_returns.amount(), dec!(27500));
        assert_eq!(result.at_maturity.projected_value.amount(), dec!(77500));
    }

    #[test]
    fn test_rental_yield_is_annual_income_times_years() {
        let params = InvestmentParameters::new(standard_terms(), 37).unwrap();
        let result = project(&params);

        assert_eq!(
            result.at_maturity.rental_yield,
            result.annual_rental_income.multiply(dec!(5))
        );
    }

    #[test]
    fn test_projected_value_is_principal_plus_returns() {
        let params = InvestmentParameters::new(standard_terms(), 123).unwrap();
        let result = project(&params);

        assert_eq!(
            result.at_maturity.projected_value,
            result.investment_amount + result.at_maturity.total_returns
        );
    }

    #[test]
    fn test_zero_rates_preserve_principal() {
        let terms = ListingTerms::new(
            usd(dec!(250)),
            1,
            100,
            Rate::zero(),
            Rate::zero(),
            3,
            Rate::zero(),
        )
        .unwrap();
        let params = InvestmentParameters::new(terms, 10).unwrap();
        let result = project(&params);

        assert!(result.annual_rental_income.is_zero());
        assert!(result.at_maturity.total_returns.is_zero());
        assert_eq!(result.at_maturity.projected_value.amount(), dec!(2500));
        assert_eq!(
            result.early_withdrawal.amount_after_penalty.amount(),
            dec!(2500)
        );
    }

    #[test]
    fn test_projection_is_idempotent() {
        let params = InvestmentParameters::new(graduated_terms(), 42).unwrap();
        assert_eq!(project(&params), project(&params));
    }

    #[test]
    fn test_fractional_unit_price_keeps_precision() {
        let terms = ListingTerms::new(
            usd(dec!(333.33)),
            1,
            100,
            Rate::from_percentage(dec!(7.25)),
            Rate::from_percentage(dec!(2.5)),
            4,
            Rate::from_percentage(dec!(10)),
        )
        .unwrap();
        let params = InvestmentParameters::new(terms, 3).unwrap();
        let result = project(&params);

        assert_eq!(result.investment_amount.amount(), dec!(999.99));
        // 999.99 * 0.0725, full precision retained
        assert_eq!(result.annual_rental_income.amount(), dec!(72.499275));
    }
}

// ============================================================================
// Display Rounding Tests
// ============================================================================

mod display_tests {
    use super::*;

    #[test]
    fn test_rounded_for_display_uses_two_places() {
        let terms = ListingTerms::new(
            usd(dec!(333.33)),
            1,
            100,
            Rate::from_percentage(dec!(7.25)),
            Rate::from_percentage(dec!(2.5)),
            4,
            Rate::from_percentage(dec!(10)),
        )
        .unwrap();
        let params = InvestmentParameters::new(terms, 3).unwrap();
        let result = project(&params);
        let display = result.rounded_for_display();

        assert_eq!(display.annual_rental_income.amount(), dec!(72.50));
        // The original keeps full precision
        assert_eq!(result.annual_rental_income.amount(), dec!(72.499275));
    }

    #[test]
    fn test_display_rounding_is_half_to_even() {
        // 5 units at 8.50 with 5% yield: 42.50 * 0.05 = 2.125, a midpoint
        let terms = ListingTerms::new(
            usd(dec!(8.50)),
            1,
            100,
            Rate::from_percentage(dec!(5)),
            Rate::zero(),
            1,
            Rate::zero(),
        )
        .unwrap();
        let params = InvestmentParameters::new(terms, 5).unwrap();
        let display = project(&params).rounded_for_display();

        // Half-to-even: 2.125 lands on 2.12, not 2.13
        assert_eq!(display.annual_rental_income.amount(), dec!(2.12));
    }
}

// ============================================================================
// Penalty Resolution Tests
// ============================================================================

mod penalty_tests {
    use super::*;

    #[test]
    fn test_graduated_resolution_table() {
        let params = InvestmentParameters::new(graduated_terms(), 10).unwrap();

        let expected: [(u32, Decimal); 7] = [
            (0, dec!(10)),
            (1, dec!(10)),
            (2, dec!(10)),
            (3, dec!(5)),
            (4, dec!(5)),
            (5, dec!(0)),
            (6, dec!(0)),
        ];

        for (elapsed, pct) in expected {
            let outcome = early_withdrawal_at(&params, elapsed);
            assert_eq!(
                outcome.penalty.as_percentage(),
                pct,
                "elapsed year {elapsed}"
            );
        }
    }

    #[test]
    fn test_zero_penalty_returns_full_principal() {
        let params = InvestmentParameters::new(graduated_terms(), 10).unwrap();
        let outcome = early_withdrawal_at(&params, 5);

        assert_eq!(outcome.amount_after_penalty, params.investment_amount());
    }

    #[test]
    fn test_full_penalty_returns_nothing() {
        let terms = standard_terms().with_graduated_penalties(
            PenaltySchedule::new(vec![PenaltyTier::new(0, dec!(100))]).unwrap(),
        );
        let params = InvestmentParameters::new(terms, 10).unwrap();
        let outcome = early_withdrawal_at(&params, 2);

        assert!(outcome.amount_after_penalty.is_zero());
    }

    #[test]
    fn test_flat_penalty_without_schedule() {
        let params = InvestmentParameters::new(standard_terms(), 10).unwrap();

        for elapsed in 0..6 {
            let outcome = early_withdrawal_at(&params, elapsed);
            assert_eq!(outcome.penalty.as_percentage(), dec!(10));
            assert_eq!(outcome.amount_after_penalty.amount(), dec!(9000));
        }
    }

    #[test]
    fn test_malformed_schedule_is_rejected_not_coalesced() {
        let result = PenaltySchedule::new(vec![
            PenaltyTier::new(5, dec!(0)),
            PenaltyTier::new(1, dec!(10)),
        ]);
        assert!(matches!(
            result,
            Err(ProjectionError::InvalidPenaltySchedule(_))
        ));
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_below_minimum_iff_under_min_units() {
        for units in 1..5 {
            assert!(matches!(
                InvestmentParameters::new(standard_terms(), units),
                Err(ProjectionError::BelowMinimum { .. })
            ));
        }
        assert!(InvestmentParameters::new(standard_terms(), 5).is_ok());
    }

    #[test]
    fn test_exceeds_available_iff_over_available_units() {
        assert!(InvestmentParameters::new(standard_terms(), 500).is_ok());
        assert!(matches!(
            InvestmentParameters::new(standard_terms(), 501),
            Err(ProjectionError::ExceedsAvailable { .. })
        ));
    }

    #[test]
    fn test_validation_errors_are_mutually_exclusive() {
        // With min <= available every unit count hits at most one failure.
        for units in 0..=600 {
            let result = InvestmentParameters::new(standard_terms(), units);
            match result {
                Err(ProjectionError::BelowMinimum { .. }) => assert!(units < 5),
                Err(ProjectionError::ExceedsAvailable { .. }) => assert!(units > 500),
                Ok(_) => assert!((5..=500).contains(&units)),
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_validation_error_names_the_offending_bound() {
        let err = InvestmentParameters::new(standard_terms(), 2).unwrap_err();
        assert!(err.to_string().contains("below the minimum of 5"));

        let err = InvestmentParameters::new(standard_terms(), 501).unwrap_err();
        assert!(err.to_string().contains("500 units available"));
    }
}

// ============================================================================
// Calculator Tests
// ============================================================================

mod calculator_tests {
    use super::*;
    use domain_returns::ports::LocalProjector;
    use domain_returns::CalculationError;

    #[test]
    fn test_calculator_projects_valid_input() {
        let calc = InvestmentCalculator::new(standard_terms());
        let result = calc.calculate(50).unwrap();
        assert_eq!(result.at_maturity.projected_value.amount(), dec!(77500));
    }

    #[tokio::test]
    async fn test_calculator_via_port_matches_local() {
        let calc = InvestmentCalculator::new(graduated_terms());
        let via_port = calc.calculate_via(&LocalProjector, 50).await.unwrap();
        assert_eq!(via_port, calc.calculate(50).unwrap());
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_the_port() {
        let calc = InvestmentCalculator::new(standard_terms());
        let result = calc.calculate_via(&LocalProjector, 0).await;
        assert!(matches!(result, Err(CalculationError::Validation(_))));
    }

    #[test]
    fn test_sequencer_discards_stale_results() {
        let sequencer = CalculationSequencer::new();
        let calc = InvestmentCalculator::new(standard_terms());

        let slow = sequencer.begin();
        let slow_result = calc.calculate(10).unwrap();

        let fast = sequencer.begin();
        let fast_result = calc.calculate(20).unwrap();

        // The newer request renders even though the older one finished later.
        assert_eq!(
            sequencer.accept(fast, fast_result.clone()),
            Some(fast_result)
        );
        assert_eq!(sequencer.accept(slow, slow_result), None);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn terms_strategy()(
            price_minor in 1i64..10_000_000i64,
            available in 1u32..10_000u32,
            yield_bp in 0u32..5_000u32,
            appreciation_bp in 0u32..5_000u32,
            years in 1u32..30u32,
            penalty_bp in 0u32..=10_000u32,
        ) -> ListingTerms {
            ListingTerms::new(
                Money::from_minor(price_minor, Currency::USD),
                1,
                available,
                Rate::from_percentage(Decimal::new(yield_bp as i64, 2)),
                Rate::from_percentage(Decimal::new(appreciation_bp as i64, 2)),
                years,
                Rate::from_percentage(Decimal::new(penalty_bp as i64, 2)),
            )
            .unwrap()
        }
    }

    proptest! {
        #[test]
        fn rental_yield_equals_annual_income_times_years(terms in terms_strategy()) {
            let units = terms.available_units();
            let params = InvestmentParameters::new(terms, units).unwrap();
            let result = project(&params);
            let years = Decimal::from(result.locking_period.years);

            prop_assert_eq!(
                result.at_maturity.rental_yield,
                result.annual_rental_income.multiply(years)
            );
        }

        #[test]
        fn projected_value_is_additive(terms in terms_strategy()) {
            let units = terms.min_units();
            let params = InvestmentParameters::new(terms, units).unwrap();
            let result = project(&params);

            prop_assert_eq!(
                result.at_maturity.projected_value,
                result.investment_amount + result.at_maturity.total_returns
            );
        }

        #[test]
        fn monetary_outputs_are_non_negative(terms in terms_strategy()) {
            let units = terms.min_units();
            let params = InvestmentParameters::new(terms, units).unwrap();
            let result = project(&params);

            prop_assert!(!result.annual_rental_income.is_negative());
            prop_assert!(!result.at_maturity.total_returns.is_negative());
            prop_assert!(!result.at_maturity.projected_value.is_negative());
            prop_assert!(!result.early_withdrawal.amount_after_penalty.is_negative());
        }

        #[test]
        fn projection_is_referentially_transparent(terms in terms_strategy()) {
            let units = terms.min_units();
            let params = InvestmentParameters::new(terms, units).unwrap();
            prop_assert_eq!(project(&params), project(&params));
        }
    }
}
