//! Returns Domain Ports
//!
//! The `ReturnsPort` trait is the seam between the calculator and whatever
//! actually performs the projection. Two implementations satisfy the same
//! contract:
//!
//! - **Local**: [`LocalProjector`] calls the pure projector in-process
//! - **Remote**: the calculation-service adapter in `infra_remote` sends the
//!   parameters over HTTP and decodes the service response
//!
//! The choice is made at application startup from configuration; callers
//! only ever see the trait.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::params::InvestmentParameters;
use crate::projector::{self, ProjectionResult};

/// Port for performing a returns projection
#[async_trait]
pub trait ReturnsPort: DomainPort {
    /// Projects the returns for already-validated parameters
    ///
    /// # Errors
    ///
    /// Remote implementations surface transport failures as transient
    /// `PortError` variants and explicit service rejections as
    /// `PortError::Rejected` with the verbatim message.
    async fn project(&self, params: &InvestmentParameters) -> Result<ProjectionResult, PortError>;
}

/// In-process projection source backed by the pure projector
///
/// Infallible: validation already happened when the parameters were built.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProjector;

impl DomainPort for LocalProjector {}

#[async_trait]
impl ReturnsPort for LocalProjector {
    async fn project(&self, params: &InvestmentParameters) -> Result<ProjectionResult, PortError> {
        Ok(projector::project(params))
    }
}
