//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, rounding,
//! currency handling, and rate application.

use core_kernel::{Money, Currency, Rate, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_does_not_round() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_handles_kwd_three_decimals() {
        let m = Money::from_minor(1000, Currency::KWD);
        assert_eq!(m.amount(), dec!(1.000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-100.00), Currency::USD);
        assert!(m.is_negative());
        assert_eq!(m.amount(), dec!(-100.00));
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_zero_true_for_zero_amount() {
        assert!(Money::zero(Currency::USD).is_zero());
    }

    #[test]
    fn test_is_positive_false_for_zero() {
        assert!(!Money::zero(Currency::USD).is_positive());
    }

    #[test]
    fn test_is_negative_false_for_zero() {
        assert!(!Money::zero(Currency::USD).is_negative());
    }

    #[test]
    fn test_abs_of_negative() {
        let m = Money::new(dec!(-42.42), Currency::AED);
        assert_eq!(m.abs().amount(), dec!(42.42));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(55.25), Currency::USD);
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.amount(), dec!(155.25));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let usd = Money::new(dec!(100.00), Currency::USD);
        let sar = Money::new(dec!(100.00), Currency::SAR);
        assert!(matches!(
            usd.checked_add(&sar),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(50.00), Currency::USD);
        let b = Money::new(dec!(75.00), Currency::USD);
        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(diff.amount(), dec!(-25.00));
    }

    #[test]
    fn test_multiply_by_unit_count() {
        let price = Money::new(dec!(1000), Currency::USD);
        let total = price.multiply(dec!(50));
        assert_eq!(total.amount(), dec!(50000));
    }

    #[test]
    fn test_divide_by_zero_fails() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert!(matches!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero)));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_two_places() {
        let m = Money::new(dec!(10.987654), Currency::USD);
        assert_eq!(m.round_to_currency().amount(), dec!(10.99));
    }

    #[test]
    fn test_round_to_currency_three_places_for_kwd() {
        let m = Money::new(dec!(10.98765), Currency::KWD);
        assert_eq!(m.round_to_currency().amount(), dec!(10.988));
    }

    #[test]
    fn test_round_bankers_midpoint_goes_to_even() {
        assert_eq!(
            Money::new(dec!(0.125), Currency::USD).round_bankers(2).amount(),
            dec!(0.12)
        );
        assert_eq!(
            Money::new(dec!(0.135), Currency::USD).round_bankers(2).amount(),
            dec!(0.14)
        );
    }

    #[test]
    fn test_round_bankers_is_display_only() {
        // The original value is untouched; rounding returns a new value.
        let m = Money::new(dec!(0.125), Currency::USD);
        let _ = m.round_bankers(2);
        assert_eq!(m.amount(), dec!(0.125));
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_from_percentage_divides_by_hundred() {
        let rate = Rate::from_percentage(dec!(8));
        assert_eq!(rate.as_decimal(), dec!(0.08));
        assert_eq!(rate.as_percentage(), dec!(8.00));
    }

    #[test]
    fn test_apply_rate_to_money() {
        let rate = Rate::from_percentage(dec!(3));
        let amount = Money::new(dec!(50000), Currency::USD);
        assert_eq!(rate.apply(&amount).amount(), dec!(1500.00));
    }

    #[test]
    fn test_complement_of_full_penalty_is_zero() {
        let rate = Rate::from_percentage(dec!(100));
        let amount = Money::new(dec!(50000), Currency::USD);
        assert!(rate.complement().apply(&amount).is_zero());
    }

    #[test]
    fn test_zero_rate_retains_everything() {
        let rate = Rate::zero();
        let amount = Money::new(dec!(50000), Currency::USD);
        assert_eq!(rate.complement().apply(&amount), amount);
    }

    #[test]
    fn test_rate_ordering() {
        let low = Rate::from_percentage(dec!(5));
        let high = Rate::from_percentage(dec!(10));
        assert!(low < high);
    }
}
