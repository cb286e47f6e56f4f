//! Remote calculation-service adapter

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use core_kernel::{Currency, DomainPort, ExternalServiceConfig, Money, PortError, Rate};
use domain_returns::params::InvestmentParameters;
use domain_returns::ports::ReturnsPort;
use domain_returns::projector::{
    EarlyWithdrawalProjection, LockingPeriodProjection, MaturityProjection, ProjectionResult,
};

use crate::client::{build_client, classify_status, map_transport_error};
use crate::wire::{CalculateOutcome, CalculateRequest, CalculateSuccess, WirePenaltyTier};

const SERVICE: &str = "calculation-service";

/// `ReturnsPort` implementation calling the remote calculation service
#[derive(Debug, Clone)]
pub struct RemoteReturnsAdapter {
    client: Client,
    config: ExternalServiceConfig,
    currency: Currency,
}

impl RemoteReturnsAdapter {
    /// Creates an adapter for the given service config and platform currency
    pub fn new(config: ExternalServiceConfig, currency: Currency) -> Result<Self, PortError> {
        let client = build_client(&config)?;
        Ok(Self {
            client,
            config,
            currency,
        })
    }

    fn request_for(&self, params: &InvestmentParameters) -> CalculateRequest {
        let terms = params.terms();
        CalculateRequest {
            investment_amount: params.investment_amount().amount(),
            property_id: None,
            locking_period_years: terms.locking_period_years(),
            graduated_penalties: terms.graduated_penalties().map(|schedule| {
                schedule
                    .tiers()
                    .iter()
                    .map(|tier| WirePenaltyTier {
                        year: tier.year_threshold,
                        penalty_percentage: tier.penalty.as_percentage(),
                    })
                    .collect()
            }),
        }
    }

    fn result_from(&self, wire: CalculateSuccess) -> ProjectionResult {
        let money = |amount| Money::new(amount, self.currency);

        ProjectionResult {
            investment_amount: money(wire.investment_amount),
            annual_rental_income: money(wire.returns.annual_rental_income),
            locking_period: LockingPeriodProjection {
                years: wire.settings.locking_period_years,
                projected_value: money(wire.returns.locking_period.projected_value),
            },
            at_maturity: MaturityProjection {
                rental_yield: money(wire.returns.at_maturity.rental_yield),
                appreciation: money(wire.returns.at_maturity.appreciation),
                total_returns: money(wire.returns.at_maturity.total_returns),
                projected_value: money(wire.returns.at_maturity.projected_value),
            },
            early_withdrawal: EarlyWithdrawalProjection {
                penalty: Rate::from_percentage(wire.early_withdrawal.penalty_percentage),
                locking_period_years: wire.early_withdrawal.locking_period_years,
                amount_after_penalty: money(wire.early_withdrawal.amount_after_penalty),
            },
        }
    }
}

impl DomainPort for RemoteReturnsAdapter {}

#[async_trait]
impl ReturnsPort for RemoteReturnsAdapter {
    async fn project(&self, params: &InvestmentParameters) -> Result<ProjectionResult, PortError> {
        let url = format!("{}/returns/calculate", self.config.base_url);
        let request = self.request_for(params);

        debug!(amount = %request.investment_amount, "calling calculation service");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                map_transport_error(SERVICE, "calculate_returns", self.config.timeout_secs, e)
            })?;

        if let Some(err) = classify_status(SERVICE, "Projection", response.status()) {
            return Err(err);
        }

        let outcome: CalculateOutcome = response.json().await.map_err(|e| {
            PortError::internal(format!("malformed calculation response: {e}"))
        })?;

        match outcome {
            CalculateOutcome::Success(success) if success.success => {
                Ok(self.result_from(*success))
            }
            CalculateOutcome::Success(_) => {
                Err(PortError::rejected("calculation service reported failure"))
            }
            CalculateOutcome::Failure(failure) => Err(PortError::rejected(failure.message)),
        }
    }
}
