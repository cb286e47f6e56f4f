//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money, Rate};
use domain_returns::{ListingTerms, PenaltySchedule, PenaltyTier};

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::AED),
        Just(Currency::SAR),
        Just(Currency::KWD),
        Just(Currency::INR),
    ]
}

/// Strategy for generating positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating valid Money values with positive amounts
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating USD Money values
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(|amount| Money::from_minor(amount, Currency::USD))
}

/// Strategy for generating rates between 0% and 50%, two decimal places
pub fn rate_strategy() -> impl Strategy<Value = Rate> {
    (0u32..5_000u32).prop_map(|bp| Rate::from_percentage(Decimal::new(bp as i64, 2)))
}

/// Strategy for generating penalty rates between 0% and 100%
pub fn penalty_rate_strategy() -> impl Strategy<Value = Rate> {
    (0u32..=10_000u32).prop_map(|bp| Rate::from_percentage(Decimal::new(bp as i64, 2)))
}

/// Strategy for generating valid graduated penalty schedules
///
/// Thresholds are strictly increasing by construction.
pub fn penalty_schedule_strategy() -> impl Strategy<Value = PenaltySchedule> {
    (
        proptest::collection::vec((1u32..5u32, 0u32..=10_000u32), 1..5),
    )
        .prop_map(|(steps,)| {
            let mut threshold = 0;
            let tiers = steps
                .into_iter()
                .map(|(gap, bp)| {
                    threshold += gap;
                    PenaltyTier {
                        year_threshold: threshold,
                        penalty: Rate::from_percentage(Decimal::new(bp as i64, 2)),
                    }
                })
                .collect();
            PenaltySchedule::new(tiers).expect("generated schedule is valid")
        })
}

/// Strategy for generating valid USD listing terms
pub fn listing_terms_strategy() -> impl Strategy<Value = ListingTerms> {
    (
        1i64..10_000_000i64,
        1u32..10_000u32,
        rate_strategy(),
        rate_strategy(),
        1u32..30u32,
        penalty_rate_strategy(),
        proptest::option::of(penalty_schedule_strategy()),
    )
        .prop_map(
            |(price_minor, available, rental_yield, appreciation, years, penalty, schedule)| {
                let terms = ListingTerms::new(
                    Money::from_minor(price_minor, Currency::USD),
                    1,
                    available,
                    rental_yield,
                    appreciation,
                    years,
                    penalty,
                )
                .expect("generated terms are valid");

                match schedule {
                    Some(schedule) => terms.with_graduated_penalties(schedule),
                    None => terms,
                }
            },
        )
}
