//! Wallet DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use domain_wallet::WalletSnapshot;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceResponse {
    pub available_balance: Decimal,
    pub pending_withdrawals: Decimal,
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
    pub currency: String,
}

impl From<&WalletSnapshot> for WalletBalanceResponse {
    fn from(snapshot: &WalletSnapshot) -> Self {
        Self {
            available_balance: snapshot.available_balance.round_to_currency().amount(),
            pending_withdrawals: snapshot.pending_withdrawals.round_to_currency().amount(),
            total_deposits: snapshot.total_deposits.round_to_currency().amount(),
            total_withdrawals: snapshot.total_withdrawals.round_to_currency().amount(),
            currency: snapshot.currency().code().to_string(),
        }
    }
}
