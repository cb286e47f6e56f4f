//! Core Kernel - Foundational types and utilities for the investment platform
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money and rate types with precise decimal arithmetic
//! - Strongly-typed identifiers for domain entities
//! - Port infrastructure shared by internal and external adapters

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, Rate, MoneyError};
pub use identifiers::{
    PropertyId, InvestmentId, InvestorId, WalletId, TransactionId,
};
pub use ports::{DomainPort, PortError, ExternalServiceConfig};
