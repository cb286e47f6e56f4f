//! In-memory investment register
//!
//! The register is the server-side authority behind the submission
//! boundary: it tracks accepted investments and the units remaining per
//! property, and refuses over-subscription.
//!
//! # Invariants
//!
//! - Units remaining for a property never go negative
//! - An accepted investment is never modified, only its status advanced

use std::collections::HashMap;

use core_kernel::{InvestmentId, InvestorId, PropertyId};
use crate::error::InvestmentError;
use crate::investment::Investment;

/// Registry of accepted investments with per-property unit accounting
#[derive(Debug, Default)]
pub struct InvestmentRegister {
    investments: HashMap<InvestmentId, Investment>,
    units_remaining: HashMap<PropertyId, u32>,
}

impl InvestmentRegister {
    /// Creates an empty register
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a property for investment with the given unit supply
    pub fn open_property(&mut self, property_id: PropertyId, units: u32) {
        self.units_remaining.insert(property_id, units);
    }

    /// Units still available for a property
    pub fn units_remaining(&self, property_id: &PropertyId) -> Option<u32> {
        self.units_remaining.get(property_id).copied()
    }

    /// Records an accepted investment, consuming units from the property
    ///
    /// # Errors
    ///
    /// - `NotOpenForInvestment` if the property is unknown
    /// - `InsufficientUnits` if fewer units remain than requested
    pub fn record(&mut self, investment: Investment) -> Result<InvestmentId, InvestmentError> {
        let remaining = self
            .units_remaining
            .get_mut(&investment.property_id)
            .ok_or_else(|| {
                InvestmentError::NotOpenForInvestment(investment.property_id.to_string())
            })?;

        if investment.units > *remaining {
            return Err(InvestmentError::InsufficientUnits {
                property_id: investment.property_id.to_string(),
                requested: investment.units,
                available: *remaining,
            });
        }

        *remaining -= investment.units;

        let id = investment.id;
        self.investments.insert(id, investment);
        Ok(id)
    }

    /// Looks up an investment by ID
    pub fn get(&self, id: &InvestmentId) -> Option<&Investment> {
        self.investments.get(id)
    }

    /// Mutable lookup, for status advancement
    pub fn get_mut(&mut self, id: &InvestmentId) -> Option<&mut Investment> {
        self.investments.get_mut(id)
    }

    /// All investments for an investor, newest first
    pub fn for_investor(&self, investor_id: &InvestorId) -> Vec<&Investment> {
        let mut found: Vec<&Investment> = self
            .investments
            .values()
            .filter(|inv| &inv.investor_id == investor_id)
            .collect();
        found.sort_by(|a, b| b.invested_at.cmp(&a.invested_at));
        found
    }
}
