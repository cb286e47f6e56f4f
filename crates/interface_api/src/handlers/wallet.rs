//! Wallet handlers

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use core_kernel::InvestorId;

use crate::dto::wallet::WalletBalanceResponse;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceQuery {
    pub investor_id: Option<String>,
}

/// Returns the wallet balance view for an investor
pub async fn wallet_balance(
    State(state): State<AppState>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<WalletBalanceResponse>, ApiError> {
    let investor_id = match &query.investor_id {
        Some(raw) => raw
            .parse::<InvestorId>()
            .map_err(|_| ApiError::BadRequest("Malformed investor id".to_string()))?,
        None => state.default_investor,
    };

    let snapshot = state.wallet.balance(investor_id).await?;
    Ok(Json(WalletBalanceResponse::from(&snapshot)))
}
