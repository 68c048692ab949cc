//! All-features enablement

use log::{info, warn};
use serde::Serialize;

use super::inventory;
use crate::client::OrganizationsApi;
use crate::client::models::OrganizationState;
use crate::error::Result;

/// What the enabler did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureChange {
    /// The organization already had all features
    AlreadyEnabled,
    /// The all-features upgrade was requested
    Enabled,
    /// There is no organization to upgrade
    NoOrganization,
}

/// Make sure the organization has all features enabled.
///
/// Reads the current feature set and only requests the upgrade when it is
/// not already `ALL`. An account without an organization is left alone.
pub async fn enable_all_features<C>(client: &C) -> Result<FeatureChange>
where
    C: OrganizationsApi + ?Sized,
{
    let org = match inventory::describe_organization_state(client).await? {
        OrganizationState::Present(org) => org,
        OrganizationState::Absent => {
            info!("No AWS Organization exists yet, nothing to enable");
            return Ok(FeatureChange::NoOrganization);
        }
    };

    if org.feature_set.is_all() {
        info!("AWS Organization {} already has all features enabled", org.id);
        return Ok(FeatureChange::AlreadyEnabled);
    }

    warn!(
        "The existing AWS Organization {} does not have all features enabled. The solution will update your organization so that all features are enabled.",
        org.id
    );
    client.enable_all_features().await?;
    Ok(FeatureChange::Enabled)
}
