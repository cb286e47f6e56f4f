//! Read-only wallet snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, InvestorId, Money, WalletId};

/// A point-in-time view of an investor's wallet
///
/// Snapshots come from the external ledger and are never mutated here;
/// a fresh snapshot replaces a stale one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSnapshot {
    /// Wallet identifier
    pub id: WalletId,
    /// Owning investor
    pub investor_id: InvestorId,
    /// Balance available for new investments
    pub available_balance: Money,
    /// Withdrawals requested but not yet settled
    pub pending_withdrawals: Money,
    /// Lifetime deposits
    pub total_deposits: Money,
    /// Lifetime withdrawals
    pub total_withdrawals: Money,
    /// When the ledger produced this view
    pub as_of: DateTime<Utc>,
}

impl WalletSnapshot {
    /// Creates a snapshot with zeroed lifetime totals
    pub fn new(investor_id: InvestorId, available_balance: Money) -> Self {
        let currency = available_balance.currency();
        Self {
            id: WalletId::new_v7(),
            investor_id,
            available_balance,
            pending_withdrawals: Money::zero(currency),
            total_deposits: Money::zero(currency),
            total_withdrawals: Money::zero(currency),
            as_of: Utc::now(),
        }
    }

    /// Sets the pending withdrawals
    pub fn with_pending_withdrawals(mut self, pending: Money) -> Self {
        self.pending_withdrawals = pending;
        self
    }

    /// Sets the lifetime totals
    pub fn with_totals(mut self, deposits: Money, withdrawals: Money) -> Self {
        self.total_deposits = deposits;
        self.total_withdrawals = withdrawals;
        self
    }

    /// The wallet's currency
    pub fn currency(&self) -> Currency {
        self.available_balance.currency()
    }
}
