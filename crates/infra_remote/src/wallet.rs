//! Remote wallet-ledger adapter

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

use core_kernel::{DomainPort, ExternalServiceConfig, InvestorId, Money, PortError, WalletId};
use domain_wallet::ports::WalletPort;
use domain_wallet::snapshot::WalletSnapshot;

use crate::client::{build_client, classify_status, map_transport_error};
use crate::wire::WireWalletBalance;

const SERVICE: &str = "wallet-service";

/// `WalletPort` implementation reading balances from the ledger service
#[derive(Debug, Clone)]
pub struct RemoteWalletAdapter {
    client: Client,
    config: ExternalServiceConfig,
}

impl RemoteWalletAdapter {
    /// Creates an adapter for the given service config
    pub fn new(config: ExternalServiceConfig) -> Result<Self, PortError> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }

    fn snapshot_from(investor_id: InvestorId, wire: WireWalletBalance) -> WalletSnapshot {
        let money = |amount| Money::new(amount, wire.currency);

        WalletSnapshot {
            id: WalletId::new_v7(),
            investor_id,
            available_balance: money(wire.available_balance),
            pending_withdrawals: money(wire.pending_withdrawals),
            total_deposits: money(wire.total_deposits),
            total_withdrawals: money(wire.total_withdrawals),
            as_of: Utc::now(),
        }
    }
}

impl DomainPort for RemoteWalletAdapter {}

#[async_trait]
impl WalletPort for RemoteWalletAdapter {
    async fn balance(&self, investor_id: InvestorId) -> Result<WalletSnapshot, PortError> {
        let url = format!("{}/wallet/balance", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("investorId", investor_id.as_uuid().to_string())])
            .send()
            .await
            .map_err(|e| {
                map_transport_error(SERVICE, "wallet_balance", self.config.timeout_secs, e)
            })?;

        if let Some(err) = classify_status(SERVICE, "Wallet", response.status()) {
            return Err(err);
        }

        let wire: WireWalletBalance = response
            .json()
            .await
            .map_err(|e| PortError::internal(format!("malformed wallet response: {e}")))?;

        Ok(Self::snapshot_from(investor_id, wire))
    }
}
