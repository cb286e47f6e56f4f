//! Calculation DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_returns::{ListingTerms, ProjectionResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub investment_amount: Decimal,
    pub property_id: Option<String>,
    pub locking_period_years: u32,
    pub graduated_penalties: Option<Vec<PenaltyTierRequest>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyTierRequest {
    pub year: u32,
    pub penalty_percentage: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub success: bool,
    pub investment_amount: Decimal,
    pub settings: SettingsResponse,
    pub returns: ReturnsResponse,
    pub early_withdrawal: EarlyWithdrawalResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub locking_period_years: u32,
    pub rental_yield_percentage: Decimal,
    pub appreciation_rate_percentage: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnsResponse {
    pub annual_rental_income: Decimal,
    pub locking_period: LockingPeriodResponse,
    pub at_maturity: AtMaturityResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockingPeriodResponse {
    pub projected_value: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtMaturityResponse {
    pub rental_yield: Decimal,
    pub appreciation: Decimal,
    pub total_returns: Decimal,
    pub projected_value: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyWithdrawalResponse {
    pub penalty_percentage: Decimal,
    pub locking_period_years: u32,
    pub amount_after_penalty: Decimal,
}

impl CalculateResponse {
    /// Builds the response envelope from a projection and the terms used
    ///
    /// Amounts are rounded for display; the projection itself computed at
    /// full precision.
    pub fn from_projection(result: &ProjectionResult, terms: &ListingTerms, years: u32) -> Self {
        let display = result.rounded_for_display();

        Self {
            success: true,
            investment_amount: display.investment_amount.amount(),
            settings: SettingsResponse {
                locking_period_years: years,
                rental_yield_percentage: terms.rental_yield().as_percentage(),
                appreciation_rate_percentage: terms.appreciation().as_percentage(),
            },
            returns: ReturnsResponse {
                annual_rental_income: display.annual_rental_income.amount(),
                locking_period: LockingPeriodResponse {
                    projected_value: display.locking_period.projected_value.amount(),
                },
                at_maturity: AtMaturityResponse {
                    rental_yield: display.at_maturity.rental_yield.amount(),
                    appreciation: display.at_maturity.appreciation.amount(),
                    total_returns: display.at_maturity.total_returns.amount(),
                    projected_value: display.at_maturity.projected_value.amount(),
                },
            },
            early_withdrawal: EarlyWithdrawalResponse {
                penalty_percentage: display.early_withdrawal.penalty.as_percentage(),
                locking_period_years: display.early_withdrawal.locking_period_years,
                amount_after_penalty: display.early_withdrawal.amount_after_penalty.amount(),
            },
        }
    }
}
