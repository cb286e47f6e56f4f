//! Investment domain errors

use thiserror::Error;

/// Errors that can occur in the investment domain
#[derive(Debug, Error)]
pub enum InvestmentError {
    #[error("Invalid submission transition from {from} to {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("{message}")]
    RemoteRejected { message: String },

    #[error("Property {property_id} has {available} units available, {requested} requested")]
    InsufficientUnits {
        property_id: String,
        requested: u32,
        available: u32,
    },

    #[error("Property {0} is not open for investment")]
    NotOpenForInvestment(String),

    #[error("Investment not found: {0}")]
    InvestmentNotFound(String),
}
