//! Investment DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_investment::Investment;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestRequest {
    pub property_id: String,
    pub amount: Decimal,
    pub shares: Option<u32>,
    /// Investing party; the platform demo investor when absent
    pub investor_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestResponse {
    pub success: bool,
    pub data: InvestmentData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentData {
    pub investment_id: String,
    pub amount: Decimal,
    pub shares: u32,
    pub status: String,
    pub invested_at: DateTime<Utc>,
}

impl From<&Investment> for InvestResponse {
    fn from(investment: &Investment) -> Self {
        Self {
            success: true,
            data: InvestmentData {
                investment_id: investment.id.to_string(),
                amount: investment.amount.round_to_currency().amount(),
                shares: investment.units,
                status: format!("{:?}", investment.status).to_lowercase(),
                invested_at: investment.invested_at,
            },
        }
    }
}
