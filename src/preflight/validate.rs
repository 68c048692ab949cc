//! Validation orchestrator
//!
//! Runs the probes in a fixed order and aggregates their diagnostics:
//!
//! 1. Identity Center, independent of organization state
//! 2. Organization existence
//! 3. Only when an organization exists: service access, organizational
//!    units, additional accounts
//!
//! A compatible organization then gets all features enabled.

use log::{debug, warn};
use serde::Serialize;

use super::features::{self, FeatureChange};
use super::probes;
use super::report::{Check, ValidationReport};
use crate::client::{IdentityCenterApi, OrganizationsApi};
use crate::error::Result;

/// Outcome of a successful validation run.
#[derive(Debug, Clone, Serialize)]
pub struct Validated {
    pub report: ValidationReport,
    pub features: FeatureChange,
}

/// Record a probe result, narrating failures.
fn record(report: &mut ValidationReport, check: Check, diagnostic: Option<String>) {
    if let Some(diagnostic) = &diagnostic {
        warn!("{}", diagnostic);
    }
    report.record(check, diagnostic);
}

/// Run every applicable probe and return the report without failing on issues.
pub async fn evaluate<O, I>(organizations: &O, identity_center: &I) -> Result<ValidationReport>
where
    O: OrganizationsApi + ?Sized,
    I: IdentityCenterApi + ?Sized,
{
    let mut report = ValidationReport::new();

    let identity = probes::identity_center_enabled(identity_center).await?;
    record(&mut report, Check::IdentityCenter, identity);

    if probes::organization_not_configured(organizations).await? {
        debug!("Skipping organization structure checks: no organization exists");
        report.absent(Check::Organization);
        report.skip(Check::ServiceAccess);
        report.skip(Check::OrganizationalUnits);
        report.skip(Check::AdditionalAccounts);
        return Ok(report);
    }
    report.pass(Check::Organization);

    let services = probes::services_enabled(organizations).await?;
    record(&mut report, Check::ServiceAccess, services);

    let units = probes::organizational_units_exist(organizations).await?;
    record(&mut report, Check::OrganizationalUnits, units);

    let accounts = probes::additional_accounts(organizations).await?;
    record(&mut report, Check::AdditionalAccounts, accounts);

    Ok(report)
}

/// Validate that a landing zone can be deployed, then enable all features.
///
/// Fails with a single [`ValidationError`](crate::error::ValidationError)
/// listing every issue found. The feature upgrade only runs when there are
/// no issues.
pub async fn validate_organization<O, I>(
    organizations: &O,
    identity_center: &I,
) -> Result<Validated>
where
    O: OrganizationsApi + ?Sized,
    I: IdentityCenterApi + ?Sized,
{
    let report = evaluate(organizations, identity_center).await?.into_result()?;
    let features = features::enable_all_features(organizations).await?;

    Ok(Validated { report, features })
}
