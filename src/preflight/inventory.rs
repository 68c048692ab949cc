//! Collectors that read organization state
//!
//! Each collector drains one paginated listing into memory through
//! [`paginate`] and [`collect_all`]. Nothing is cached; every call reads
//! current service state.

use log::debug;

use crate::client::models::{
    Account, EnabledServicePrincipal, IdentityCenterInstance, OrganizationState,
    OrganizationalUnit, Root,
};
use crate::client::{IdentityCenterApi, OrganizationsApi, collect_all, paginate};
use crate::error::{ApiError, Error, Result};

/// Describe the organization, turning "not in use" into [`OrganizationState::Absent`].
///
/// Any other error is returned unchanged.
pub async fn describe_organization_state<C>(client: &C) -> Result<OrganizationState>
where
    C: OrganizationsApi + ?Sized,
{
    match client.describe_organization().await {
        Ok(org) => Ok(OrganizationState::Present(org)),
        Err(Error::Api(ApiError::OrganizationNotInUse)) => {
            debug!("No organization exists for the calling account");
            Ok(OrganizationState::Absent)
        }
        Err(e) => Err(e),
    }
}

/// Get the organization's root.
pub async fn get_organizations_root<C>(client: &C) -> Result<Root>
where
    C: OrganizationsApi + ?Sized,
{
    let roots = collect_all(
        paginate(|token| client.list_roots(token)),
        client.max_items(),
    )
    .await?;

    roots.into_iter().next().ok_or_else(|| {
        ApiError::InvalidResponse("Organization has no root".to_string()).into()
    })
}

/// Get every account in the organization.
pub async fn get_organization_accounts<C>(client: &C) -> Result<Vec<Account>>
where
    C: OrganizationsApi + ?Sized,
{
    collect_all(
        paginate(|token| client.list_accounts(token)),
        client.max_items(),
    )
    .await
}

/// Get the organizational units directly below `parent_id`.
pub async fn get_organizational_units_for_parent<C>(
    client: &C,
    parent_id: &str,
) -> Result<Vec<OrganizationalUnit>>
where
    C: OrganizationsApi + ?Sized,
{
    let mut units = collect_all(
        paginate(|token| client.list_organizational_units_for_parent(parent_id, token)),
        client.max_items(),
    )
    .await?;

    for unit in &mut units {
        unit.parent_id = Some(parent_id.to_string());
    }
    Ok(units)
}

/// Get the organizational units directly below the root.
///
/// Looks the root up first when `root_id` is not given.
pub async fn get_organizational_units_for_root<C>(
    client: &C,
    root_id: Option<&str>,
) -> Result<Vec<OrganizationalUnit>>
where
    C: OrganizationsApi + ?Sized,
{
    match root_id {
        Some(id) => get_organizational_units_for_parent(client, id).await,
        None => {
            let root = get_organizations_root(client).await?;
            get_organizational_units_for_parent(client, &root.id).await
        }
    }
}

/// Get the services with trusted access to the organization.
pub async fn get_enabled_services<C>(client: &C) -> Result<Vec<EnabledServicePrincipal>>
where
    C: OrganizationsApi + ?Sized,
{
    collect_all(
        paginate(|token| client.list_aws_service_access_for_organization(token)),
        client.max_items(),
    )
    .await
}

/// Get the Identity Center instances in the identity client's region.
pub async fn get_identity_center_instances<C>(client: &C) -> Result<Vec<IdentityCenterInstance>>
where
    C: IdentityCenterApi + ?Sized,
{
    collect_all(
        paginate(|token| client.list_instances(token)),
        client.max_items(),
    )
    .await
}
