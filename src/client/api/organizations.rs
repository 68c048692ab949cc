//! AWS Organizations API trait

use async_trait::async_trait;

use crate::client::models::{
    Account, EnabledServicePrincipal, Organization, OrganizationalUnit, Root,
};
use crate::client::pagination::{DEFAULT_MAX_ITEMS, Page};
use crate::error::Result;

/// Organization-management operations
///
/// List operations return one page per call. Pass the previous page's
/// `next_token` to continue; `None` starts from the beginning.
#[async_trait]
pub trait OrganizationsApi: Send + Sync {
    /// Describe the caller's organization.
    ///
    /// Fails with `ApiError::OrganizationNotInUse` when the account is not
    /// part of an organization.
    async fn describe_organization(&self) -> Result<Organization>;

    /// List the roots of the organization
    async fn list_roots(&self, next_token: Option<String>) -> Result<Page<Root>>;

    /// List organizational units directly below a root or OU
    async fn list_organizational_units_for_parent(
        &self,
        parent_id: &str,
        next_token: Option<String>,
    ) -> Result<Page<OrganizationalUnit>>;

    /// List every account in the organization
    async fn list_accounts(&self, next_token: Option<String>) -> Result<Page<Account>>;

    /// List services with trusted access to the organization
    async fn list_aws_service_access_for_organization(
        &self,
        next_token: Option<String>,
    ) -> Result<Page<EnabledServicePrincipal>>;

    /// Start the upgrade to the all-features feature set
    async fn enable_all_features(&self) -> Result<()>;

    /// Most items a single listing may collect
    fn max_items(&self) -> usize {
        DEFAULT_MAX_ITEMS
    }
}
