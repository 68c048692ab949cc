//! Validation report accumulated across checks

use serde::Serialize;

use crate::error::{Result, ValidationError};

/// Compatibility checks in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    IdentityCenter,
    Organization,
    ServiceAccess,
    OrganizationalUnits,
    AdditionalAccounts,
}

impl Check {
    /// Short description for display.
    pub fn description(&self) -> &'static str {
        match self {
            Check::IdentityCenter => "IAM Identity Center is not configured",
            Check::Organization => "AWS Organizations state",
            Check::ServiceAccess => "No services have trusted access",
            Check::OrganizationalUnits => "No organizational units below root",
            Check::AdditionalAccounts => "Management account is the only account",
        }
    }
}

/// How a single check ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Failed,
    /// Not evaluated because no organization exists
    Skipped,
    /// No organization exists yet
    Absent,
}

/// Result of one check, with its diagnostic when it failed.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub check: Check,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

/// Ordered outcomes of one validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, check: Check, status: CheckStatus, diagnostic: Option<String>) {
        self.outcomes.push(CheckOutcome {
            check,
            status,
            diagnostic,
        });
    }

    pub fn pass(&mut self, check: Check) {
        self.push(check, CheckStatus::Passed, None);
    }

    pub fn fail(&mut self, check: Check, diagnostic: impl Into<String>) {
        self.push(check, CheckStatus::Failed, Some(diagnostic.into()));
    }

    pub fn skip(&mut self, check: Check) {
        self.push(check, CheckStatus::Skipped, None);
    }

    pub fn absent(&mut self, check: Check) {
        self.push(check, CheckStatus::Absent, None);
    }

    /// Record a probe result: a diagnostic fails the check, `None` passes it.
    pub fn record(&mut self, check: Check, diagnostic: Option<String>) {
        match diagnostic {
            Some(diagnostic) => self.fail(check, diagnostic),
            None => self.pass(check),
        }
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Diagnostics in the order they were recorded.
    pub fn diagnostics(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.diagnostic.as_deref())
    }

    pub fn issue_count(&self) -> usize {
        self.diagnostics().count()
    }

    /// Whether the organization can take a landing zone deployment.
    pub fn is_compatible(&self) -> bool {
        self.issue_count() == 0
    }

    /// Turn a report with issues into the aggregated failure.
    pub fn into_result(self) -> Result<Self> {
        if self.is_compatible() {
            Ok(self)
        } else {
            Err(ValidationError { report: self }.into())
        }
    }
}
