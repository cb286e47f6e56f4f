//! Wire formats for the remote service contracts
//!
//! JSON shapes are camelCase on the wire. Amounts travel as bare decimal
//! numbers; the adapters attach the platform currency when rebuilding
//! domain values.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Currency;
use domain_investment::InvestmentStatus;

/// Request body for the calculation service
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub investment_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    pub locking_period_years: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduated_penalties: Option<Vec<WirePenaltyTier>>,
}

/// One graduated penalty tier on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePenaltyTier {
    pub year: u32,
    pub penalty_percentage: Decimal,
}

/// The settings echoed back by the calculation service
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSettings {
    pub locking_period_years: u32,
    pub rental_yield_percentage: Decimal,
    pub appreciation_rate_percentage: Decimal,
}

/// Projected returns on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReturns {
    pub annual_rental_income: Decimal,
    pub locking_period: WireLockingPeriod,
    pub at_maturity: WireAtMaturity,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLockingPeriod {
    pub projected_value: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAtMaturity {
    pub rental_yield: Decimal,
    pub appreciation: Decimal,
    pub total_returns: Decimal,
    pub projected_value: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEarlyWithdrawal {
    pub penalty_percentage: Decimal,
    pub locking_period_years: u32,
    pub amount_after_penalty: Decimal,
}

/// Successful calculation response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateSuccess {
    pub success: bool,
    pub investment_amount: Decimal,
    pub settings: WireSettings,
    pub returns: WireReturns,
    pub early_withdrawal: WireEarlyWithdrawal,
}

/// Explicit failure envelope shared by all services
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceFailure {
    pub success: bool,
    pub message: String,
}

/// Calculation response: success or explicit failure
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CalculateOutcome {
    Success(Box<CalculateSuccess>),
    Failure(ServiceFailure),
}

/// Request body for the investment service
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestRequest {
    pub property_id: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<u32>,
}

/// Accepted investment data
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireInvestment {
    pub investment_id: String,
    pub amount: Decimal,
    pub shares: u32,
    pub status: InvestmentStatus,
    pub invested_at: DateTime<Utc>,
}

/// Successful investment response
#[derive(Debug, Clone, Deserialize)]
pub struct InvestSuccess {
    pub success: bool,
    pub data: WireInvestment,
}

/// Investment response: success or explicit failure
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InvestOutcome {
    Success(InvestSuccess),
    Failure(ServiceFailure),
}

/// Wallet balance response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireWalletBalance {
    pub available_balance: Decimal,
    pub pending_withdrawals: Decimal,
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
    pub currency: Currency,
}
