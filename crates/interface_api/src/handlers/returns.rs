//! Calculation handlers

use axum::{extract::State, Json};
use rust_decimal_macros::dec;

use core_kernel::{Money, PropertyId};
use domain_returns::penalty::{PenaltySchedule, PenaltyTier};
use domain_returns::{project_amount, ProjectionError};

use crate::dto::calculate::{CalculateRequest, CalculateResponse};
use crate::error::ApiError;
use crate::AppState;

/// Calculates projected returns for an investment amount
///
/// Terms come from the named property, or the platform defaults when the
/// request names none. A graduated penalty schedule in the request overrides
/// the listing's schedule; malformed schedules are rejected.
pub async fn calculate_returns(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, ApiError> {
    if request.investment_amount <= dec!(0) {
        return Err(ApiError::Validation(
            "Investment amount must be positive".to_string(),
        ));
    }
    if request.locking_period_years == 0 {
        return Err(ProjectionError::InvalidLockingPeriod { years: 0 }.into());
    }

    let property_id = request
        .property_id
        .as_deref()
        .map(str::parse::<PropertyId>)
        .transpose()
        .map_err(|_| ApiError::BadRequest("Malformed property id".to_string()))?;

    let terms = state
        .catalog
        .terms_for(property_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    // A schedule in the request overrides the listing's own; either way the
    // figure reported is for an immediate withdrawal.
    let penalty = match &request.graduated_penalties {
        Some(tiers) => {
            let schedule = PenaltySchedule::new(
                tiers
                    .iter()
                    .map(|tier| PenaltyTier::new(tier.year, tier.penalty_percentage))
                    .collect(),
            )?;
            schedule.resolve(0, terms.early_withdrawal_penalty())
        }
        None => terms.resolve_penalty(0),
    };

    let amount = Money::new(request.investment_amount, state.config.currency);
    let result = project_amount(
        amount,
        terms.rental_yield(),
        terms.appreciation(),
        request.locking_period_years,
        penalty,
    );

    Ok(Json(CalculateResponse::from_projection(
        &result,
        &terms,
        request.locking_period_years,
    )))
}
