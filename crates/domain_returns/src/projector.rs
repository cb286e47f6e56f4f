//! The pure returns projector
//!
//! `project` is deterministic and side-effect free: identical parameters
//! always produce identical results, and no I/O happens at this layer.
//! Transports (local calls, the HTTP calculation service) wrap this
//! function; they never reimplement it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};
use crate::params::InvestmentParameters;
use crate::DISPLAY_DECIMALS;

/// Projected value at the end of the locking period from rental income alone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LockingPeriodProjection {
    /// Locking period length in whole years
    pub years: u32,
    /// Principal plus rental income accrued over the locking period
    pub projected_value: Money,
}

/// Returns realized at maturity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaturityProjection {
    /// Total rental income over the locking period
    pub rental_yield: Money,
    /// Appreciation realized at maturity
    pub appreciation: Money,
    /// Rental income plus appreciation
    pub total_returns: Money,
    /// Principal plus total returns
    pub projected_value: Money,
}

/// Outcome of withdrawing before maturity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarlyWithdrawalProjection {
    /// Penalty rate applied to the principal
    pub penalty: Rate,
    /// Locking period the penalty is measured against
    pub locking_period_years: u32,
    /// Principal retained after the penalty
    pub amount_after_penalty: Money,
}

/// The complete projection for one set of investment parameters
///
/// Results are immutable; a new input produces a fresh projection rather
/// than mutating an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// The derived principal
    pub investment_amount: Money,
    /// Rental income for one year
    pub annual_rental_income: Money,
    /// Value at the end of the locking period
    pub locking_period: LockingPeriodProjection,
    /// Returns at maturity
    pub at_maturity: MaturityProjection,
    /// Early-withdrawal outcome for an immediate exit
    pub early_withdrawal: EarlyWithdrawalProjection,
}

impl ProjectionResult {
    /// Returns a copy rounded for display with banker's rounding
    ///
    /// Internal consumers keep the full-precision original.
    pub fn rounded_for_display(&self) -> Self {
        let dp = DISPLAY_DECIMALS;
        Self {
            investment_amount: self.investment_amount.round_bankers(dp),
            annual_rental_income: self.annual_rental_income.round_bankers(dp),
            locking_period: LockingPeriodProjection {
                years: self.locking_period.years,
                projected_value: self.locking_period.projected_value.round_bankers(dp),
            },
            at_maturity: MaturityProjection {
                rental_yield: self.at_maturity.rental_yield.round_bankers(dp),
                appreciation: self.at_maturity.appreciation.round_bankers(dp),
                total_returns: self.at_maturity.total_returns.round_bankers(dp),
                projected_value: self.at_maturity.projected_value.round_bankers(dp),
            },
            early_withdrawal: EarlyWithdrawalProjection {
                penalty: self.early_withdrawal.penalty,
                locking_period_years: self.early_withdrawal.locking_period_years,
                amount_after_penalty: self
                    .early_withdrawal
                    .amount_after_penalty
                    .round_bankers(dp),
            },
        }
    }
}

/// Projects the returns for the given parameters
///
/// Pure and deterministic. The early-withdrawal figure is reported for an
/// immediate exit; use [`early_withdrawal_at`] for any other elapsed time.
pub fn project(params: &InvestmentParameters) -> ProjectionResult {
    let terms = params.terms();
    project_amount(
        params.investment_amount(),
        terms.rental_yield(),
        terms.appreciation(),
        terms.locking_period_years(),
        terms.resolve_penalty(0),
    )
}

/// Projects the returns for a bare principal
///
/// The raw engine behind [`project`], used where the caller already holds a
/// validated amount (for example the calculation-service endpoint, which
/// receives an amount rather than a unit count).
pub fn project_amount(
    amount: Money,
    rental_yield: Rate,
    appreciation: Rate,
    locking_period_years: u32,
    withdrawal_penalty: Rate,
) -> ProjectionResult {
    let years = Decimal::from(locking_period_years);

    let annual_rental_income = rental_yield.apply(&amount);
    let rental_yield = annual_rental_income.multiply(years);
    let appreciation = appreciation.apply(&amount).multiply(years);
    let total_returns = rental_yield + appreciation;

    ProjectionResult {
        investment_amount: amount,
        annual_rental_income,
        locking_period: LockingPeriodProjection {
            years: locking_period_years,
            projected_value: amount + rental_yield,
        },
        at_maturity: MaturityProjection {
            rental_yield,
            appreciation,
            total_returns,
            projected_value: amount + total_returns,
        },
        early_withdrawal: EarlyWithdrawalProjection {
            penalty: withdrawal_penalty,
            locking_period_years,
            amount_after_penalty: withdrawal_penalty.complement().apply(&amount),
        },
    }
}

/// Computes the early-withdrawal outcome after `elapsed_years` of holding
///
/// Resolves the penalty from the graduated schedule when the listing has
/// one (highest threshold not exceeding the elapsed time; flat rate before
/// the first threshold), else applies the flat rate.
pub fn early_withdrawal_at(
    params: &InvestmentParameters,
    elapsed_years: u32,
) -> EarlyWithdrawalProjection {
    let terms = params.terms();
    let penalty = terms.resolve_penalty(elapsed_years);

    EarlyWithdrawalProjection {
        penalty,
        locking_period_years: terms.locking_period_years(),
        amount_after_penalty: penalty.complement().apply(&params.investment_amount()),
    }
}
