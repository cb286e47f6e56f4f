//! Wallet domain errors

use thiserror::Error;

/// Errors raised by local affordability checks
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Investment amount {amount} is below the minimum of {minimum}")]
    BelowMinimumInvestment { amount: String, minimum: String },

    #[error("Investment amount {amount} exceeds the available balance of {available}")]
    InsufficientBalance { amount: String, available: String },

    #[error("Currency mismatch: wallet holds {wallet}, investment is in {investment}")]
    CurrencyMismatch { wallet: String, investment: String },
}
