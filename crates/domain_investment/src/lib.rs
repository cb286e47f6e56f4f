//! Investment Domain
//!
//! This crate implements the submission side of the investment flow:
//!
//! - **Submission**: the state machine a single investment attempt moves
//!   through (`Idle → Validating → Submitting → Succeeded | Failed`)
//! - **Investment**: the accepted record and its lifecycle
//! - **Register**: in-memory unit accounting per property listing
//! - **Invalidation**: the cached views a successful submission invalidates
//!
//! A submission is at-most-once from the client's intent; the transition
//! matrix keeps the submit action disabled while a request is in flight.
//! That is a usability safeguard, not a delivery guarantee — exactly-once
//! acceptance requires an idempotency key on the ledger side.

pub mod investment;
pub mod submission;
pub mod register;
pub mod invalidation;
pub mod ports;
pub mod error;

pub use investment::{Investment, InvestmentStatus};
pub use submission::{Submission, SubmissionState};
pub use register::InvestmentRegister;
pub use invalidation::CachedView;
pub use ports::{InvestmentPort, SubmissionRequest, InvestmentReceipt};
pub use error::InvestmentError;
