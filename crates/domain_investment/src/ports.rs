//! Investment Domain Ports
//!
//! `InvestmentPort` is the seam between the submission flow and the service
//! that accepts investments. The production adapter in `infra_remote` posts
//! to the investment endpoint; tests use in-process fakes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{DomainPort, InvestmentId, InvestorId, Money, PortError, PropertyId};

use crate::investment::InvestmentStatus;

/// A submission request as sent to the investment service
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    /// The property to invest in
    pub property_id: PropertyId,
    /// The investing party
    pub investor_id: InvestorId,
    /// Amount to commit
    pub amount: Money,
    /// Units to purchase, when the caller works in units
    pub units: Option<u32>,
}

/// The service's acknowledgement of an accepted investment
#[derive(Debug, Clone)]
pub struct InvestmentReceipt {
    /// Identifier assigned by the service
    pub investment_id: InvestmentId,
    /// Amount committed
    pub amount: Money,
    /// Units purchased
    pub units: u32,
    /// Status at acceptance
    pub status: InvestmentStatus,
    /// Acceptance timestamp
    pub invested_at: DateTime<Utc>,
}

/// Port for submitting investments
#[async_trait]
pub trait InvestmentPort: DomainPort {
    /// Submits an investment request
    ///
    /// # Errors
    ///
    /// Transport failures surface as transient `PortError` variants; an
    /// explicit service refusal surfaces as `PortError::Rejected` with the
    /// verbatim message.
    async fn submit(&self, request: &SubmissionRequest) -> Result<InvestmentReceipt, PortError>;
}
