//! The single-submission state machine
//!
//! One `Submission` tracks one investment attempt:
//!
//! ```text
//! Idle ──▶ Validating ──▶ Submitting ──▶ Succeeded
//!              │               │
//!              ▼               ▼
//!            Failed ◀──────────┘
//! ```
//!
//! `Submitting` is reachable only after the local checks pass, and the
//! matrix refuses a second `start_submitting` while one is in flight.
//! `Failed` is re-enterable into `Validating` so the user can correct and
//! retry; `Succeeded` is terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::{InvestmentId, InvestorId, Money, PropertyId};
use crate::error::InvestmentError;
use crate::invalidation::CachedView;

/// States a submission moves through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    /// Nothing in progress
    Idle,
    /// Local checks running
    Validating,
    /// Request sent, response pending
    Submitting,
    /// The ledger accepted the investment
    Succeeded,
    /// Validation or the remote service failed; reason kept verbatim
    Failed,
}

impl SubmissionState {
    fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "Idle",
            SubmissionState::Validating => "Validating",
            SubmissionState::Submitting => "Submitting",
            SubmissionState::Succeeded => "Succeeded",
            SubmissionState::Failed => "Failed",
        }
    }
}

/// A single investment submission attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// The property being invested in
    pub property_id: PropertyId,
    /// The investing party
    pub investor_id: InvestorId,
    /// Amount to commit
    pub amount: Money,
    /// Units to purchase
    pub units: u32,
    state: SubmissionState,
    checks_passed: bool,
    failure_reason: Option<String>,
    accepted_investment: Option<InvestmentId>,
    started_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Submission {
    /// Creates an idle submission
    pub fn new(
        property_id: PropertyId,
        investor_id: InvestorId,
        amount: Money,
        units: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            property_id,
            investor_id,
            amount,
            units,
            state: SubmissionState::Idle,
            checks_passed: false,
            failure_reason: None,
            accepted_investment: None,
            started_at: now,
            updated_at: now,
        }
    }

    /// Current state
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// The verbatim failure reason, if the submission failed
    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    /// The accepted investment, once succeeded
    pub fn accepted_investment(&self) -> Option<InvestmentId> {
        self.accepted_investment
    }

    /// Whether the submit action should be enabled
    ///
    /// Disabled while a request is in flight; a safeguard against double
    /// submission, not a delivery guarantee.
    pub fn can_submit(&self) -> bool {
        !matches!(
            self.state,
            SubmissionState::Submitting | SubmissionState::Succeeded
        )
    }

    /// Begins local validation
    pub fn start_validation(&mut self) -> Result<(), InvestmentError> {
        self.transition(SubmissionState::Validating)?;
        self.checks_passed = false;
        self.failure_reason = None;
        Ok(())
    }

    /// Records that both local checks (minimum and balance) passed
    pub fn checks_passed(&mut self) -> Result<(), InvestmentError> {
        if self.state != SubmissionState::Validating {
            return Err(self.invalid_transition("Submitting"));
        }
        self.checks_passed = true;
        Ok(())
    }

    /// Moves to `Submitting`; requires validation to have passed
    pub fn start_submitting(&mut self) -> Result<(), InvestmentError> {
        if !self.checks_passed {
            return Err(self.invalid_transition("Submitting"));
        }
        self.transition(SubmissionState::Submitting)
    }

    /// Records acceptance and returns the cached views to invalidate
    pub fn succeed(&mut self, investment_id: InvestmentId) -> Result<Vec<CachedView>, InvestmentError> {
        self.transition(SubmissionState::Succeeded)?;
        self.accepted_investment = Some(investment_id);
        info!(%investment_id, "investment submission accepted");
        Ok(CachedView::invalidated_on_success())
    }

    /// Records a failure with the reason surfaced verbatim
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), InvestmentError> {
        self.transition(SubmissionState::Failed)?;
        self.failure_reason = Some(reason.into());
        Ok(())
    }

    fn transition(&mut self, target: SubmissionState) -> Result<(), InvestmentError> {
        use SubmissionState::*;
        let allowed = matches!(
            (&self.state, &target),
            (Idle, Validating)
                | (Validating, Submitting)
                | (Validating, Failed)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Failed, Validating)
        );

        if !allowed {
            return Err(self.invalid_transition(target.name()));
        }

        self.state = target;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn invalid_transition(&self, to: &str) -> InvestmentError {
        InvestmentError::InvalidStateTransition {
            from: self.state.name().to_string(),
            to: to.to_string(),
        }
    }
}
