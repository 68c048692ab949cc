//! AWS JSON protocol clients for Organizations and IAM Identity Center

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::api::{IdentityCenterApi, OrganizationsApi};
use super::models::{
    Account, EnabledServicePrincipal, IdentityCenterInstance, Organization, OrganizationalUnit,
    Root,
};
use super::pagination::{DEFAULT_MAX_ITEMS, Page};
use super::rate_limit::{ServiceCategory, ThrottleLimiter};
use super::retry::RetryPolicy;
use super::sigv4::{self, Credentials, SignableRequest};
use crate::error::{ApiError, ConfigError, Result};

const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Request timeout for a single HTTP call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to build a service client.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Region the client signs for and, by default, connects to
    pub region: String,
    /// Caller/product identifier appended to the User-Agent
    pub caller_identifier: String,
    /// Endpoint override; defaults to the public regional endpoint
    pub endpoint: Option<String>,
    pub credentials: Credentials,
    pub retry: RetryPolicy,
    /// Cap for collected listings
    pub max_items: usize,
}

impl ClientSettings {
    pub fn new(
        region: impl Into<String>,
        caller_identifier: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            region: region.into(),
            caller_identifier: caller_identifier.into(),
            endpoint: None,
            credentials,
            retry: RetryPolicy::default(),
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

/// Public endpoint for a service in a region.
pub fn default_endpoint(category: ServiceCategory, region: &str) -> String {
    let host_prefix = match category {
        ServiceCategory::Organizations => "organizations",
        ServiceCategory::IdentityCenter => "sso",
    };
    let suffix = if region.starts_with("cn-") {
        "amazonaws.com.cn"
    } else {
        "amazonaws.com"
    };
    format!("https://{}.{}.{}", host_prefix, region, suffix)
}

/// Map an error response onto [`ApiError`].
fn classify_error(
    category: ServiceCategory,
    status: StatusCode,
    code: Option<&str>,
    message: String,
    retry_after: Option<Duration>,
) -> ApiError {
    match code {
        Some("AWSOrganizationsNotInUseException") => ApiError::OrganizationNotInUse,
        Some(
            "TooManyRequestsException"
            | "ThrottlingException"
            | "Throttling"
            | "RequestLimitExceeded",
        ) => ApiError::Throttled {
            service: category.signing_name(),
            retry_after,
        },
        Some("AccessDeniedException" | "AccessDenied") => ApiError::AccessDenied(message),
        _ if status == StatusCode::TOO_MANY_REQUESTS => ApiError::Throttled {
            service: category.signing_name(),
            retry_after,
        },
        Some(code) if status.is_server_error() => {
            ApiError::ServerError(format!("{}: {}", code, message))
        }
        Some(code) => ApiError::Service {
            code: code.to_string(),
            message,
        },
        None if status == StatusCode::FORBIDDEN => ApiError::AccessDenied(message),
        None if status.is_server_error() => {
            ApiError::ServerError(format!("{}: {}", status, message))
        }
        None => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

/// Strip namespace and URI decorations from an error code.
///
/// Codes arrive as `Code`, `namespace#Code` or `Code:http://...`.
fn normalize_error_code(raw: &str) -> &str {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    code.split(':').next().unwrap_or(code).trim()
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", default)]
    kind: Option<String>,
    #[serde(alias = "Message", default)]
    message: Option<String>,
}

/// Signed JSON-over-HTTP transport shared by both service clients.
struct JsonTransport {
    http: HttpClient,
    url: Url,
    host: String,
    category: ServiceCategory,
    region: String,
    credentials: Credentials,
    retry: RetryPolicy,
    limiter: ThrottleLimiter,
    user_agent: String,
}

impl JsonTransport {
    fn new(category: ServiceCategory, settings: ClientSettings) -> Result<Self> {
        let endpoint = settings
            .endpoint
            .clone()
            .unwrap_or_else(|| default_endpoint(category, &settings.region));
        let url = Url::parse(&endpoint).map_err(|e| {
            ConfigError::Invalid(format!("Invalid endpoint '{}': {}", endpoint, e))
        })?;
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(
                    ConfigError::Invalid(format!("Endpoint '{}' has no host", endpoint)).into(),
                );
            }
        };

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let user_agent = format!(
            "lzpreflight/{} {}",
            env!("CARGO_PKG_VERSION"),
            settings.caller_identifier
        );

        Ok(Self {
            http,
            url,
            host,
            category,
            region: settings.region,
            credentials: settings.credentials,
            retry: settings.retry,
            limiter: ThrottleLimiter::new(category),
            user_agent,
        })
    }

    /// Call an operation, retrying throttled attempts per the retry policy.
    async fn call<Req, Resp>(&self, operation: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(request)?;
        self.retry
            .run(operation, || self.send_once(operation, &body))
            .await
    }

    async fn send_once<Resp: DeserializeOwned>(
        &self,
        operation: &str,
        body: &[u8],
    ) -> Result<Resp> {
        self.limiter.wait_if_active().await;

        let target = format!("{}.{}", self.category.target_prefix(), operation);
        let signed = sigv4::sign(
            &SignableRequest {
                host: &self.host,
                target: &target,
                content_type: CONTENT_TYPE,
                body,
            },
            &self.credentials,
            &self.region,
            self.category.signing_name(),
            Utc::now(),
        );

        debug!("POST {} {}", self.url, target);
        let mut request = self
            .http
            .post(self.url.clone())
            .header("Content-Type", CONTENT_TYPE)
            .header("X-Amz-Target", &target)
            .header("X-Amz-Date", &signed.amz_date)
            .header("Authorization", &signed.authorization)
            .header("User-Agent", &self.user_agent)
            .body(body.to_vec());
        if let Some(token) = &signed.security_token {
            request = request.header("X-Amz-Security-Token", token);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(ApiError::from)?;
            let text = if text.trim().is_empty() { "{}" } else { text.as_str() };
            return serde_json::from_str(text).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse {} response: {}", operation, e))
                    .into()
            });
        }

        let header_code = response
            .headers()
            .get("x-amzn-errortype")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs);
        let text = response.text().await.unwrap_or_default();
        let parsed: Option<ErrorBody> = serde_json::from_str(&text).ok();

        let raw_code = header_code.or_else(|| parsed.as_ref().and_then(|b| b.kind.clone()));
        let code = raw_code.as_deref().map(normalize_error_code);
        let message = parsed
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("{} failed with status {}", operation, status));

        let err = classify_error(self.category, status, code, message, retry_after);
        if err.is_throttling() {
            self.limiter.activate();
        }
        Err(err.into())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ListRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl<'a> ListRequest<'a> {
    fn page(next_token: Option<String>) -> Self {
        Self {
            parent_id: None,
            next_token,
        }
    }

    fn for_parent(parent_id: &'a str, next_token: Option<String>) -> Self {
        Self {
            parent_id: Some(parent_id),
            next_token,
        }
    }
}

#[derive(Serialize)]
struct EmptyRequest {}

/// Read the organization out of a DescribeOrganization response.
///
/// A response without an organization id means there is no organization,
/// same as the not-in-use error.
fn organization_from_response(organization: Option<serde_json::Value>) -> Result<Organization> {
    let organization = organization.filter(|org| {
        org.get("Id")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|id| !id.is_empty())
    });

    match organization {
        Some(value) => Ok(serde_json::from_value(value).map_err(|err| {
            ApiError::InvalidResponse(format!("DescribeOrganization: {}", err))
        })?),
        None => {
            debug!("DescribeOrganization returned no organization id");
            Err(ApiError::OrganizationNotInUse.into())
        }
    }
}

/// AWS Organizations client
pub struct AwsOrganizationsClient {
    transport: JsonTransport,
    max_items: usize,
}

impl AwsOrganizationsClient {
    /// Build a client for the management (global) region.
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let max_items = settings.max_items;
        Ok(Self {
            transport: JsonTransport::new(ServiceCategory::Organizations, settings)?,
            max_items,
        })
    }
}

#[async_trait]
impl OrganizationsApi for AwsOrganizationsClient {
    async fn describe_organization(&self) -> Result<Organization> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct DescribeOrganizationResponse {
            organization: Option<serde_json::Value>,
        }

        let response: DescribeOrganizationResponse = self
            .transport
            .call("DescribeOrganization", &EmptyRequest {})
            .await?;
        organization_from_response(response.organization)
    }

    async fn list_roots(&self, next_token: Option<String>) -> Result<Page<Root>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct ListRootsResponse {
            #[serde(default)]
            roots: Vec<Root>,
            next_token: Option<String>,
        }

        let response: ListRootsResponse = self
            .transport
            .call("ListRoots", &ListRequest::page(next_token))
            .await?;
        Ok(Page::new(response.roots, response.next_token))
    }

    async fn list_organizational_units_for_parent(
        &self,
        parent_id: &str,
        next_token: Option<String>,
    ) -> Result<Page<OrganizationalUnit>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct ListOrganizationalUnitsResponse {
            #[serde(default)]
            organizational_units: Vec<OrganizationalUnit>,
            next_token: Option<String>,
        }

        let response: ListOrganizationalUnitsResponse = self
            .transport
            .call(
                "ListOrganizationalUnitsForParent",
                &ListRequest::for_parent(parent_id, next_token),
            )
            .await?;
        Ok(Page::new(response.organizational_units, response.next_token))
    }

    async fn list_accounts(&self, next_token: Option<String>) -> Result<Page<Account>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct ListAccountsResponse {
            #[serde(default)]
            accounts: Vec<Account>,
            next_token: Option<String>,
        }

        let response: ListAccountsResponse = self
            .transport
            .call("ListAccounts", &ListRequest::page(next_token))
            .await?;
        Ok(Page::new(response.accounts, response.next_token))
    }

    async fn list_aws_service_access_for_organization(
        &self,
        next_token: Option<String>,
    ) -> Result<Page<EnabledServicePrincipal>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct ListServiceAccessResponse {
            #[serde(default)]
            enabled_service_principals: Vec<EnabledServicePrincipal>,
            next_token: Option<String>,
        }

        let response: ListServiceAccessResponse = self
            .transport
            .call("ListAWSServiceAccessForOrganization", &ListRequest::page(next_token))
            .await?;
        Ok(Page::new(
            response.enabled_service_principals,
            response.next_token,
        ))
    }

    async fn enable_all_features(&self) -> Result<()> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct Handshake {
            id: String,
            #[serde(default)]
            state: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct EnableAllFeaturesResponse {
            handshake: Option<Handshake>,
        }

        let response: EnableAllFeaturesResponse = self
            .transport
            .call("EnableAllFeatures", &EmptyRequest {})
            .await?;
        if let Some(handshake) = response.handshake {
            info!(
                "Enable-all-features handshake {} is {}",
                handshake.id,
                handshake.state.as_deref().unwrap_or("REQUESTED")
            );
        }
        Ok(())
    }

    fn max_items(&self) -> usize {
        self.max_items
    }
}

/// IAM Identity Center admin client
pub struct AwsIdentityCenterClient {
    transport: JsonTransport,
    max_items: usize,
}

impl AwsIdentityCenterClient {
    /// Build a client for the workload (home) region.
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let max_items = settings.max_items;
        Ok(Self {
            transport: JsonTransport::new(ServiceCategory::IdentityCenter, settings)?,
            max_items,
        })
    }
}

#[async_trait]
impl IdentityCenterApi for AwsIdentityCenterClient {
    async fn list_instances(
        &self,
        next_token: Option<String>,
    ) -> Result<Page<IdentityCenterInstance>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct ListInstancesResponse {
            #[serde(default)]
            instances: Vec<IdentityCenterInstance>,
            next_token: Option<String>,
        }

        let response: ListInstancesResponse = self
            .transport
            .call("ListInstances", &ListRequest::page(next_token))
            .await?;
        Ok(Page::new(response.instances, response.next_token))
    }

    fn max_items(&self) -> usize {
        self.max_items
    }
}
