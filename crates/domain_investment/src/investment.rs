//! Investment records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{InvestmentId, InvestorId, Money, PropertyId};
use crate::error::InvestmentError;

/// Lifecycle status of an accepted investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    /// Accepted, funds not yet settled by the ledger
    Pending,
    /// Settled and accruing rental income
    Active,
    /// Locking period completed, payout due
    Matured,
    /// Exited before maturity
    Withdrawn,
}

/// An accepted investment in a property listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    /// Unique identifier
    pub id: InvestmentId,
    /// The property invested in
    pub property_id: PropertyId,
    /// The investing party
    pub investor_id: InvestorId,
    /// Number of units purchased
    pub units: u32,
    /// Amount committed
    pub amount: Money,
    /// Lifecycle status
    pub status: InvestmentStatus,
    /// When the investment was accepted
    pub invested_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Investment {
    /// Creates a newly accepted investment in `Pending` status
    pub fn accepted(
        property_id: PropertyId,
        investor_id: InvestorId,
        units: u32,
        amount: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: InvestmentId::new_v7(),
            property_id,
            investor_id,
            units,
            amount,
            status: InvestmentStatus::Pending,
            invested_at: now,
            updated_at: now,
        }
    }

    /// Updates the lifecycle status
    pub fn update_status(&mut self, status: InvestmentStatus) -> Result<(), InvestmentError> {
        if !self.can_transition_to(status) {
            return Err(InvestmentError::InvalidStateTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", status),
            });
        }
        self.status = status;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Checks if a status transition is valid
    fn can_transition_to(&self, target: InvestmentStatus) -> bool {
        use InvestmentStatus::*;
        matches!(
            (self.status, target),
            (Pending, Active) | (Active, Matured) | (Pending, Withdrawn) | (Active, Withdrawn)
        )
    }
}
