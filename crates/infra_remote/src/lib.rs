//! Remote Service Adapters
//!
//! This crate implements the domain ports against the platform's remote
//! services over HTTP+JSON:
//!
//! - [`RemoteReturnsAdapter`] — the calculation service (`ReturnsPort`)
//! - [`RemoteWalletAdapter`] — the wallet ledger service (`WalletPort`)
//! - [`RemoteInvestmentAdapter`] — the investment service (`InvestmentPort`)
//!
//! # Error Handling
//!
//! Transport and service errors are mapped to `PortError` variants:
//! - request timeout -> `PortError::Timeout`
//! - connection failure -> `PortError::Connection`
//! - 5xx -> `PortError::ServiceUnavailable`
//! - 404 -> `PortError::NotFound`
//! - explicit `{"success": false, "message": ...}` -> `PortError::Rejected`
//!   with the message kept verbatim
//!
//! Every request carries the bounded timeout from the service config; a
//! hung upstream surfaces as a transient error instead of blocking the
//! caller indefinitely.

pub mod client;
pub mod wire;
pub mod returns;
pub mod wallet;
pub mod investments;

pub use returns::RemoteReturnsAdapter;
pub use wallet::RemoteWalletAdapter;
pub use investments::RemoteInvestmentAdapter;
