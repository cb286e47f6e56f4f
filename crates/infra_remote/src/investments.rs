//! Remote investment-service adapter

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use core_kernel::{Currency, DomainPort, ExternalServiceConfig, Money, PortError};
use domain_investment::ports::{InvestmentPort, InvestmentReceipt, SubmissionRequest};

use crate::client::{build_client, classify_status, map_transport_error};
use crate::wire::{InvestOutcome, InvestRequest, WireInvestment};

const SERVICE: &str = "investment-service";

/// `InvestmentPort` implementation posting to the investment service
#[derive(Debug, Clone)]
pub struct RemoteInvestmentAdapter {
    client: Client,
    config: ExternalServiceConfig,
    currency: Currency,
}

impl RemoteInvestmentAdapter {
    /// Creates an adapter for the given service config and platform currency
    pub fn new(config: ExternalServiceConfig, currency: Currency) -> Result<Self, PortError> {
        let client = build_client(&config)?;
        Ok(Self {
            client,
            config,
            currency,
        })
    }

    fn receipt_from(&self, wire: WireInvestment) -> Result<InvestmentReceipt, PortError> {
        let investment_id = wire
            .investment_id
            .parse()
            .map_err(|e| PortError::internal(format!("unparseable investment id: {e}")))?;

        Ok(InvestmentReceipt {
            investment_id,
            amount: Money::new(wire.amount, self.currency),
            units: wire.shares,
            status: wire.status,
            invested_at: wire.invested_at,
        })
    }
}

impl DomainPort for RemoteInvestmentAdapter {}

#[async_trait]
impl InvestmentPort for RemoteInvestmentAdapter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<InvestmentReceipt, PortError> {
        let url = format!("{}/investments", self.config.base_url);
        let body = InvestRequest {
            property_id: request.property_id.to_string(),
            amount: request.amount.amount(),
            shares: request.units,
        };

        debug!(property = %request.property_id, amount = %request.amount, "submitting investment");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                map_transport_error(SERVICE, "submit_investment", self.config.timeout_secs, e)
            })?;

        if let Some(err) = classify_status(SERVICE, "Investment", response.status()) {
            return Err(err);
        }

        let outcome: InvestOutcome = response
            .json()
            .await
            .map_err(|e| PortError::internal(format!("malformed investment response: {e}")))?;

        match outcome {
            InvestOutcome::Success(success) if success.success => {
                self.receipt_from(success.data)
            }
            InvestOutcome::Success(_) => {
                Err(PortError::rejected("investment service reported failure"))
            }
            InvestOutcome::Failure(failure) => Err(PortError::rejected(failure.message)),
        }
    }
}
