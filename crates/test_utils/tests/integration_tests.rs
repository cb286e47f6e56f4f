//! Integration Tests for PropShare Core
//!
//! These tests verify cross-domain workflows and end-to-end scenarios
//! that involve multiple crates working together.

use rust_decimal_macros::dec;

use core_kernel::{Currency, InvestmentId, Money};
use domain_investment::{Investment, InvestmentRegister, Submission, SubmissionState};
use domain_returns::{project, InvestmentCalculator, InvestmentParameters};
use domain_wallet::{AffordabilityPolicy, can_afford};

use test_utils::{
    IdFixtures, ListingTermsBuilder, MoneyFixtures, TermsFixtures, WalletFixtures,
    WalletSnapshotBuilder, assert_money_approx_eq,
};

mod calculate_then_invest_workflow {
    use super::*;

    /// Tests the full client-side flow: project returns, check
    /// affordability, then drive a submission to acceptance
    #[test]
    fn test_projection_to_accepted_submission() {
        // Project returns for 50 units of the reference listing
        let calculator = InvestmentCalculator::new(TermsFixtures::graduated());
        let projection = calculator.calculate(50).expect("valid unit count");
        assert_eq!(projection.investment_amount.amount(), dec!(50000));
        assert_eq!(
            projection.at_maturity.projected_value.amount(),
            dec!(77500)
        );

        // The funded wallet can afford it
        let wallet = WalletFixtures::funded();
        let policy = AffordabilityPolicy::new(Money::new(dec!(500), Currency::USD));
        policy
            .check(&projection.investment_amount, &wallet)
            .expect("funded wallet affords the investment");

        // Drive the submission through to success
        let mut submission = Submission::new(
            IdFixtures::property_id(),
            wallet.investor_id,
            projection.investment_amount,
            50,
        );
        submission.start_validation().unwrap();
        submission.checks_passed().unwrap();
        submission.start_submitting().unwrap();

        let invalidated = submission.succeed(InvestmentId::new()).unwrap();
        assert_eq!(submission.state(), &SubmissionState::Succeeded);
        assert_eq!(invalidated.len(), 3);
    }

    /// Tests that an unaffordable projection never reaches `Submitting`
    #[test]
    fn test_underfunded_wallet_blocks_submission() {
        let calculator = InvestmentCalculator::new(TermsFixtures::standard());
        let projection = calculator.calculate(50).unwrap();

        let wallet = WalletFixtures::underfunded();
        let policy = AffordabilityPolicy::new(Money::new(dec!(500), Currency::USD));
        let refusal = policy.check(&projection.investment_amount, &wallet);
        assert!(refusal.is_err());

        // The failure is recorded with the reason, and the user can retry
        let mut submission = Submission::new(
            IdFixtures::property_id(),
            wallet.investor_id,
            projection.investment_amount,
            50,
        );
        submission.start_validation().unwrap();
        submission
            .fail(refusal.unwrap_err().to_string())
            .unwrap();

        assert_eq!(submission.state(), &SubmissionState::Failed);
        assert!(submission
            .failure_reason()
            .unwrap()
            .contains("exceeds the available balance"));
        assert!(submission.can_submit());
    }

    /// Tests that the server-side register enforces the same unit bounds
    /// the client validated against
    #[test]
    fn test_register_mirrors_listing_supply() {
        let terms = ListingTermsBuilder::new()
            .with_unit_bounds(1, 100)
            .build()
            .unwrap();

        let property_id = IdFixtures::property_id();
        let mut register = InvestmentRegister::new();
        register.open_property(property_id, terms.available_units());

        // Client-side validation refuses what the register would refuse
        assert!(InvestmentParameters::new(terms.clone(), 101).is_err());

        let accepted = Investment::accepted(
            property_id,
            IdFixtures::investor_id(),
            100,
            MoneyFixtures::unit_price().multiply(dec!(100)),
        );
        register.record(accepted).unwrap();
        assert_eq!(register.units_remaining(&property_id), Some(0));
    }
}

mod projection_consistency {
    use super::*;

    /// Tests that wallet affordability agrees with projected amounts
    #[test]
    fn test_projection_amount_feeds_affordability() {
        let terms = ListingTermsBuilder::new()
            .with_unit_price(Money::new(dec!(333.33), Currency::USD))
            .build()
            .unwrap();

        let params = InvestmentParameters::new(terms, 3).unwrap();
        let projection = project(&params);

        let snapshot = WalletSnapshotBuilder::new()
            .with_balance(Money::new(dec!(999.99), Currency::USD))
            .build();

        assert!(can_afford(
            &projection.investment_amount,
            &snapshot.available_balance
        ));
        assert_money_approx_eq(
            &projection.investment_amount,
            &Money::new(dec!(999.99), Currency::USD),
            dec!(0),
        );
    }

    /// Tests the graduated schedule across the whole holding period
    #[test]
    fn test_graduated_withdrawal_improves_over_time() {
        let params = InvestmentParameters::new(TermsFixtures::graduated(), 10).unwrap();

        let mut previous = Money::zero(Currency::USD);
        for elapsed in 0..=5 {
            let outcome = domain_returns::early_withdrawal_at(&params, elapsed);
            assert!(outcome.amount_after_penalty.amount() >= previous.amount());
            previous = outcome.amount_after_penalty;
        }

        // By the final tier the full principal is retained
        assert_eq!(previous, params.investment_amount());
    }
}

mod generated_scenarios {
    use super::*;
    use proptest::prelude::*;
    use test_utils::listing_terms_strategy;

    proptest! {
        /// For any valid listing, the projection equals what a wallet
        /// holding exactly the projected amount can afford
        #[test]
        fn projection_amount_is_always_affordable_at_exact_balance(
            terms in listing_terms_strategy()
        ) {
            let units = terms.min_units();
            let params = InvestmentParameters::new(terms, units).unwrap();
            let projection = project(&params);

            prop_assert!(can_afford(
                &projection.investment_amount,
                &projection.investment_amount
            ));
        }

        /// Projection arithmetic holds for generated listings
        #[test]
        fn projection_identities_hold(terms in listing_terms_strategy()) {
            let units = terms.available_units();
            let params = InvestmentParameters::new(terms, units).unwrap();
            let result = project(&params);

            prop_assert_eq!(
                result.at_maturity.total_returns,
                result.at_maturity.rental_yield + result.at_maturity.appreciation
            );
            prop_assert_eq!(
                result.at_maturity.projected_value,
                result.investment_amount + result.at_maturity.total_returns
            );
        }
    }
}
