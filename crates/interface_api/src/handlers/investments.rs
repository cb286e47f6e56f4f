//! Investment submission handlers

use axum::{extract::State, http::StatusCode, Json};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use core_kernel::{InvestorId, Money, PropertyId};
use domain_investment::Investment;

use crate::dto::invest::{InvestRequest, InvestResponse};
use crate::error::ApiError;
use crate::AppState;

/// Accepts an investment into a property listing
///
/// This is the authoritative side of the submission boundary: the wallet
/// balance and unit supply are re-checked here regardless of what the
/// client pre-validated.
pub async fn create_investment(
    State(state): State<AppState>,
    Json(request): Json<InvestRequest>,
) -> Result<(StatusCode, Json<InvestResponse>), ApiError> {
    let property_id: PropertyId = request
        .property_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Malformed property id".to_string()))?;

    let investor_id = match &request.investor_id {
        Some(raw) => raw
            .parse::<InvestorId>()
            .map_err(|_| ApiError::BadRequest("Malformed investor id".to_string()))?,
        None => state.default_investor,
    };

    if request.amount <= dec!(0) {
        return Err(ApiError::Validation(
            "Investment amount must be positive".to_string(),
        ));
    }

    let listing = state
        .catalog
        .get(&property_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    let amount = Money::new(request.amount, state.config.currency);
    let units = units_for(&request, listing.terms.price_per_unit().amount())?;

    // Authoritative affordability check against the ledger view.
    let snapshot = state.wallet.balance(investor_id).await?;
    state.policy.check(&amount, &snapshot)?;

    let investment = Investment::accepted(property_id, investor_id, units, amount);
    let mut register = state.register.write().await;
    let id = register.record(investment)?;
    let stored = register
        .get(&id)
        .ok_or_else(|| ApiError::Internal("Recorded investment vanished".to_string()))?;

    info!(investment = %id, property = %property_id, units, "investment accepted");

    Ok((StatusCode::CREATED, Json(InvestResponse::from(stored))))
}

/// Resolves the unit count from the request
///
/// When shares are given, the amount must match them at the listed unit
/// price; otherwise the amount must be a whole multiple of the unit price.
fn units_for(request: &InvestRequest, price_per_unit: Decimal) -> Result<u32, ApiError> {
    match request.shares {
        Some(shares) => {
            if shares == 0 {
                return Err(ApiError::Validation(
                    "Share count must be positive".to_string(),
                ));
            }
            if price_per_unit * Decimal::from(shares) != request.amount {
                return Err(ApiError::Validation(format!(
                    "Amount {} does not match {} shares at {} per share",
                    request.amount, shares, price_per_unit
                )));
            }
            Ok(shares)
        }
        None => {
            let quotient = request.amount / price_per_unit;
            if !quotient.fract().is_zero() {
                return Err(ApiError::Validation(format!(
                    "Amount {} is not a whole multiple of the unit price {}",
                    request.amount, price_per_unit
                )));
            }
            quotient
                .to_u32()
                .filter(|units| *units > 0)
                .ok_or_else(|| ApiError::Validation("Share count out of range".to_string()))
        }
    }
}
