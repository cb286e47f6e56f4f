//! Wallet Domain
//!
//! This crate provides the read-only wallet view consumed by the investment
//! flow, and the affordability checks that gate a submission before any
//! network call is made.
//!
//! # Key Concepts
//!
//! - **Wallet snapshot**: a point-in-time view of an investor's balance,
//!   sourced from the external ledger. The investment flow only ever
//!   compares against it; deposits and withdrawals happen through the
//!   external recharge/withdraw services.
//! - **Affordability**: exact decimal comparisons at full precision. A
//!   passing local check does not guarantee server-side acceptance — the
//!   ledger service remains the source of truth (another session may spend
//!   concurrently).

pub mod snapshot;
pub mod affordability;
pub mod ports;
pub mod error;

pub use snapshot::WalletSnapshot;
pub use affordability::{can_afford, AffordabilityPolicy};
pub use ports::{WalletPort, StaticWalletAdapter};
pub use error::WalletError;
