//! Wallet Domain Ports
//!
//! The `WalletPort` trait is the seam between the investment flow and the
//! ledger service that owns balances. The production adapter in
//! `infra_remote` reads the balance over HTTP; [`StaticWalletAdapter`]
//! serves fixed snapshots for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use core_kernel::{DomainPort, InvestorId, PortError};

use crate::snapshot::WalletSnapshot;

/// Port for reading wallet balances
#[async_trait]
pub trait WalletPort: DomainPort {
    /// Fetches the current wallet snapshot for an investor
    async fn balance(&self, investor_id: InvestorId) -> Result<WalletSnapshot, PortError>;
}

/// In-memory wallet source serving pre-seeded snapshots
#[derive(Debug, Default)]
pub struct StaticWalletAdapter {
    wallets: RwLock<HashMap<InvestorId, WalletSnapshot>>,
}

impl StaticWalletAdapter {
    /// Creates an adapter with no wallets
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds or replaces an investor's snapshot
    pub async fn seed(&self, snapshot: WalletSnapshot) {
        self.wallets
            .write()
            .await
            .insert(snapshot.investor_id, snapshot);
    }
}

impl DomainPort for StaticWalletAdapter {}

#[async_trait]
impl WalletPort for StaticWalletAdapter {
    async fn balance(&self, investor_id: InvestorId) -> Result<WalletSnapshot, PortError> {
        self.wallets
            .read()
            .await
            .get(&investor_id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Wallet", investor_id))
    }
}
