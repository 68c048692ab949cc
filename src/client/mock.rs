//! Mock organization and identity clients for testing
//!
//! Provides in-memory implementations of the API traits for unit testing
//! without making real service calls.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{IdentityCenterApi, OrganizationsApi};
use super::models::{
    Account, EnabledServicePrincipal, FeatureSet, IdentityCenterInstance, Organization,
    OrganizationalUnit, Root,
};
use super::pagination::{DEFAULT_MAX_ITEMS, Page};
use crate::error::{ApiError, Result};

/// Serve `pages` as a token-paginated listing. Tokens are page indexes.
fn serve_page<T: Clone>(pages: &[Vec<T>], next_token: Option<String>) -> Result<Page<T>> {
    let index = match next_token {
        None => 0,
        Some(token) => token
            .parse::<usize>()
            .map_err(|_| ApiError::InvalidResponse(format!("Unknown page token {}", token)))?,
    };
    let items = pages.get(index).cloned().unwrap_or_default();
    let next = (index + 1 < pages.len()).then(|| (index + 1).to_string());
    Ok(Page::new(items, next))
}

/// Build a minimal organization fixture.
pub fn organization(id: &str, feature_set: FeatureSet) -> Organization {
    Organization {
        id: id.to_string(),
        arn: None,
        feature_set,
        management_account_id: None,
        management_account_email: None,
    }
}

/// Build a minimal account fixture.
pub fn account(id: &str, name: &str, email: &str) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        status: Some("ACTIVE".to_string()),
        arn: None,
        joined_method: None,
        joined_timestamp: None,
    }
}

/// Build a minimal organizational unit fixture.
pub fn organizational_unit(id: &str, name: &str) -> OrganizationalUnit {
    OrganizationalUnit {
        id: id.to_string(),
        name: name.to_string(),
        arn: None,
        parent_id: None,
    }
}

/// Build a minimal enabled service principal fixture.
pub fn service_principal(principal: &str) -> EnabledServicePrincipal {
    EnabledServicePrincipal {
        service_principal: principal.to_string(),
        date_enabled: None,
    }
}

/// Build a minimal Identity Center instance fixture.
pub fn identity_center_instance(identity_store_id: &str) -> IdentityCenterInstance {
    IdentityCenterInstance {
        instance_arn: format!("arn:aws:sso:::instance/ssoins-{}", identity_store_id),
        identity_store_id: identity_store_id.to_string(),
        name: None,
        owner_account_id: None,
        status: Some("ACTIVE".to_string()),
        created_date: None,
    }
}

/// Tracks organization API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub describe_organization: usize,
    pub list_roots: usize,
    pub list_organizational_units: usize,
    pub list_accounts: usize,
    pub list_service_access: usize,
    pub enable_all_features: usize,
}

impl CallCounts {
    /// Number of listing calls that require an existing organization.
    pub fn structure_listings(&self) -> usize {
        self.list_roots
            + self.list_organizational_units
            + self.list_accounts
            + self.list_service_access
    }
}

/// Mock Organizations client.
///
/// Starts as a greenfield organization: one root, no OUs, no services, no
/// accounts, feature set `ALL`. Configure state with the builder methods.
pub struct MockOrganizationsClient {
    /// Organization returned by describe; `None` means not in use
    organization: Arc<Mutex<Option<Organization>>>,
    /// Responses consumed by describe before falling back to `organization`
    describe_queue: Arc<Mutex<VecDeque<Option<Organization>>>>,
    roots: Arc<Mutex<Vec<Root>>>,
    /// OU pages keyed by parent ID
    organizational_units: Arc<Mutex<HashMap<String, Vec<Vec<OrganizationalUnit>>>>>,
    account_pages: Arc<Mutex<Vec<Vec<Account>>>>,
    service_pages: Arc<Mutex<Vec<Vec<EnabledServicePrincipal>>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
    /// Parent IDs passed to OU listings
    ou_parents: Arc<Mutex<Vec<String>>>,
    max_items: usize,
}

impl Default for MockOrganizationsClient {
    fn default() -> Self {
        Self {
            organization: Arc::new(Mutex::new(Some(organization(
                "o-exampleorgid",
                FeatureSet::All,
            )))),
            describe_queue: Arc::new(Mutex::new(VecDeque::new())),
            roots: Arc::new(Mutex::new(vec![Root {
                id: "r-root".to_string(),
                name: "Root".to_string(),
                arn: None,
            }])),
            organizational_units: Arc::new(Mutex::new(HashMap::new())),
            account_pages: Arc::new(Mutex::new(Vec::new())),
            service_pages: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            ou_parents: Arc::new(Mutex::new(Vec::new())),
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

impl MockOrganizationsClient {
    /// Create a new mock client with greenfield defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the organization returned by describe.
    pub async fn with_organization(self, org: Organization) -> Self {
        *self.organization.lock().await = Some(org);
        self
    }

    /// Simulate an account that is not part of an organization.
    pub async fn without_organization(self) -> Self {
        *self.organization.lock().await = None;
        self
    }

    /// Queue describe responses; `None` answers "not in use".
    pub async fn with_describe_sequence(self, responses: Vec<Option<Organization>>) -> Self {
        *self.describe_queue.lock().await = responses.into();
        self
    }

    /// Configure the roots returned by list_roots.
    pub async fn with_roots(self, roots: Vec<Root>) -> Self {
        *self.roots.lock().await = roots;
        self
    }

    /// Configure OUs under a parent as a single page.
    pub async fn with_organizational_units(
        self,
        parent_id: &str,
        units: Vec<OrganizationalUnit>,
    ) -> Self {
        self.with_organizational_unit_pages(parent_id, vec![units]).await
    }

    /// Configure OUs under a parent page by page.
    pub async fn with_organizational_unit_pages(
        self,
        parent_id: &str,
        pages: Vec<Vec<OrganizationalUnit>>,
    ) -> Self {
        self.organizational_units
            .lock()
            .await
            .insert(parent_id.to_string(), pages);
        self
    }

    /// Configure accounts as a single page.
    pub async fn with_accounts(self, accounts: Vec<Account>) -> Self {
        self.with_account_pages(vec![accounts]).await
    }

    /// Configure accounts page by page.
    pub async fn with_account_pages(self, pages: Vec<Vec<Account>>) -> Self {
        *self.account_pages.lock().await = pages;
        self
    }

    /// Configure enabled service principals as a single page.
    pub async fn with_services(self, services: Vec<EnabledServicePrincipal>) -> Self {
        *self.service_pages.lock().await = vec![services];
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Lower the listing cap.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Parent IDs passed to OU listings, in call order.
    pub async fn ou_parents(&self) -> Vec<String> {
        self.ou_parents.lock().await.clone()
    }

    /// Current feature set, if an organization exists.
    pub async fn feature_set(&self) -> Option<FeatureSet> {
        self.organization
            .lock()
            .await
            .as_ref()
            .map(|org| org.feature_set.clone())
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl OrganizationsApi for MockOrganizationsClient {
    async fn describe_organization(&self) -> Result<Organization> {
        self.check_error().await?;
        self.call_count.lock().await.describe_organization += 1;

        let queued = self.describe_queue.lock().await.pop_front();
        let current = match queued {
            Some(response) => response,
            None => self.organization.lock().await.clone(),
        };
        current.ok_or_else(|| ApiError::OrganizationNotInUse.into())
    }

    async fn list_roots(&self, next_token: Option<String>) -> Result<Page<Root>> {
        self.check_error().await?;
        self.call_count.lock().await.list_roots += 1;

        let roots = self.roots.lock().await.clone();
        serve_page(&[roots], next_token)
    }

    async fn list_organizational_units_for_parent(
        &self,
        parent_id: &str,
        next_token: Option<String>,
    ) -> Result<Page<OrganizationalUnit>> {
        self.check_error().await?;
        self.call_count.lock().await.list_organizational_units += 1;
        self.ou_parents.lock().await.push(parent_id.to_string());

        let units = self.organizational_units.lock().await;
        let pages = units.get(parent_id).cloned().unwrap_or_default();
        drop(units);
        serve_page(&pages, next_token)
    }

    async fn list_accounts(&self, next_token: Option<String>) -> Result<Page<Account>> {
        self.check_error().await?;
        self.call_count.lock().await.list_accounts += 1;

        let pages = self.account_pages.lock().await.clone();
        serve_page(&pages, next_token)
    }

    async fn list_aws_service_access_for_organization(
        &self,
        next_token: Option<String>,
    ) -> Result<Page<EnabledServicePrincipal>> {
        self.check_error().await?;
        self.call_count.lock().await.list_service_access += 1;

        let pages = self.service_pages.lock().await.clone();
        serve_page(&pages, next_token)
    }

    async fn enable_all_features(&self) -> Result<()> {
        self.check_error().await?;
        self.call_count.lock().await.enable_all_features += 1;

        let mut org = self.organization.lock().await;
        match org.as_mut() {
            Some(org) => {
                org.feature_set = FeatureSet::All;
                Ok(())
            }
            None => Err(ApiError::OrganizationNotInUse.into()),
        }
    }

    fn max_items(&self) -> usize {
        self.max_items
    }
}

/// Mock Identity Center client.
#[derive(Default)]
pub struct MockIdentityCenterClient {
    instance_pages: Arc<Mutex<Vec<Vec<IdentityCenterInstance>>>>,
    error: Arc<Mutex<Option<ApiError>>>,
    list_instances_calls: Arc<Mutex<usize>>,
}

impl MockIdentityCenterClient {
    /// Create a mock with no instances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure instances as a single page.
    pub async fn with_instances(self, instances: Vec<IdentityCenterInstance>) -> Self {
        *self.instance_pages.lock().await = vec![instances];
        self
    }

    /// Configure instances page by page.
    pub async fn with_instance_pages(self, pages: Vec<Vec<IdentityCenterInstance>>) -> Self {
        *self.instance_pages.lock().await = pages;
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Number of list_instances calls made.
    pub async fn list_instances_calls(&self) -> usize {
        *self.list_instances_calls.lock().await
    }
}

#[async_trait]
impl IdentityCenterApi for MockIdentityCenterClient {
    async fn list_instances(
        &self,
        next_token: Option<String>,
    ) -> Result<Page<IdentityCenterInstance>> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        *self.list_instances_calls.lock().await += 1;

        let pages = self.instance_pages.lock().await.clone();
        serve_page(&pages, next_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_pages_with_tokens() {
        let client = MockOrganizationsClient::new()
            .with_account_pages(vec![
                vec![account("1", "a", "a@x.com")],
                vec![account("2", "b", "b@x.com")],
            ])
            .await;

        let first = client.list_accounts(None).await.unwrap();
        assert_eq!(first.items.len(), 1);
        assert_eq!(first.next_token.as_deref(), Some("1"));

        let second = client.list_accounts(first.next_token).await.unwrap();
        assert_eq!(second.items[0].id, "2");
        assert!(second.next_token.is_none());
    }

    #[tokio::test]
    async fn test_mock_describe_sequence_then_state() {
        let client = MockOrganizationsClient::new()
            .with_describe_sequence(vec![None])
            .await;

        assert!(client.describe_organization().await.is_err());
        assert!(client.describe_organization().await.is_ok());
        assert_eq!(client.call_counts().await.describe_organization, 2);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let client = MockOrganizationsClient::new()
            .with_error(ApiError::AccessDenied("denied".to_string()))
            .await;

        assert!(client.list_roots(None).await.is_err());
        assert!(client.list_roots(None).await.is_ok());
    }
}
