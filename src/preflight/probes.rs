//! Compatibility probes
//!
//! Each probe answers one question about the current organization state.
//! Probes that find an incompatibility return a diagnostic naming the
//! offending resources; they never log or fail on incompatibility
//! themselves. Service errors propagate unchanged.

use log::info;

use super::inventory;
use crate::client::{IdentityCenterApi, OrganizationsApi};
use crate::error::Result;

/// Format a diagnostic for `reason`, listing the resources involved.
fn diagnostic<I>(reason: &str, resources: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let names = resources.into_iter().collect::<Vec<_>>().join(",");
    format!(
        "AWS Control Tower Landing Zone cannot deploy because {} (\"{}\").",
        reason, names
    )
}

/// Fails when any Identity Center instance exists in the home region.
pub async fn identity_center_enabled<C>(client: &C) -> Result<Option<String>>
where
    C: IdentityCenterApi + ?Sized,
{
    let instances = inventory::get_identity_center_instances(client).await?;
    if instances.is_empty() {
        return Ok(None);
    }

    Ok(Some(diagnostic(
        "IAM Identity Center is configured",
        instances.into_iter().map(|i| i.identity_store_id),
    )))
}

/// Whether the calling account has no organization yet.
pub async fn organization_not_configured<C>(client: &C) -> Result<bool>
where
    C: OrganizationsApi + ?Sized,
{
    let state = inventory::describe_organization_state(client).await?;
    if let Some(org) = state.organization() {
        info!("AWS Organizations already configured ({})", org.id);
    }
    Ok(state.is_absent())
}

/// Fails when any service has trusted access to the organization.
pub async fn services_enabled<C>(client: &C) -> Result<Option<String>>
where
    C: OrganizationsApi + ?Sized,
{
    let services = inventory::get_enabled_services(client).await?;
    if services.is_empty() {
        return Ok(None);
    }

    Ok(Some(diagnostic(
        "AWS Organizations have services enabled",
        services.into_iter().map(|s| s.service_principal),
    )))
}

/// Fails when any organizational unit exists below the root.
pub async fn organizational_units_exist<C>(client: &C) -> Result<Option<String>>
where
    C: OrganizationsApi + ?Sized,
{
    let units = inventory::get_organizational_units_for_root(client, None).await?;
    if units.is_empty() {
        return Ok(None);
    }

    Ok(Some(diagnostic(
        "there are multiple organizational units in AWS Organizations",
        units.into_iter().map(|u| u.name),
    )))
}

/// Fails when the organization holds any account besides the management account.
pub async fn additional_accounts<C>(client: &C) -> Result<Option<String>>
where
    C: OrganizationsApi + ?Sized,
{
    let accounts = inventory::get_organization_accounts(client).await?;
    if accounts.len() <= 1 {
        return Ok(None);
    }

    Ok(Some(diagnostic(
        "there are multiple accounts in AWS Organizations",
        accounts.iter().map(|a| a.label()),
    )))
}
