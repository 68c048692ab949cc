//! Organization structure models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Feature configuration level of an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureSet {
    /// All features, including policy and governance capabilities
    All,
    /// Consolidated billing only (the partial feature set)
    ConsolidatedBilling,
    /// Any value this client does not know about
    #[serde(other)]
    Unknown,
}

impl FeatureSet {
    /// Whether this is the maximal feature set.
    pub fn is_all(&self) -> bool {
        matches!(self, FeatureSet::All)
    }
}

/// Organization details as reported by DescribeOrganization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Organization {
    /// Organization ID (o-xxxxxxxxxx)
    pub id: String,

    /// Organization ARN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// Feature set currently enabled
    pub feature_set: FeatureSet,

    /// Management account ID
    #[serde(
        default,
        rename = "MasterAccountId",
        skip_serializing_if = "Option::is_none"
    )]
    pub management_account_id: Option<String>,

    /// Management account email
    #[serde(
        default,
        rename = "MasterAccountEmail",
        skip_serializing_if = "Option::is_none"
    )]
    pub management_account_email: Option<String>,
}

/// Whether an organization exists for the calling account.
///
/// The service reports a missing organization as an error; callers get it
/// back as a value instead.
#[derive(Debug, Clone)]
pub enum OrganizationState {
    Present(Organization),
    Absent,
}

impl OrganizationState {
    /// The organization, if one exists.
    pub fn organization(&self) -> Option<&Organization> {
        match self {
            OrganizationState::Present(org) => Some(org),
            OrganizationState::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, OrganizationState::Absent)
    }
}

/// Top-level container of the organization tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Root {
    /// Root ID (r-xxxx)
    pub id: String,

    /// Root name (usually "Root")
    pub name: String,

    /// Root ARN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

/// Organizational unit below a parent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationalUnit {
    /// OU ID (ou-xxxx-xxxxxxxx)
    pub id: String,

    /// OU name
    pub name: String,

    /// OU ARN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// Parent the OU was listed under. Not part of the service response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Service granted trusted access to the organization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnabledServicePrincipal {
    /// Service principal, e.g. `config.amazonaws.com`
    pub service_principal: String,

    /// When trusted access was enabled
    #[serde(
        default,
        with = "timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_enabled: Option<DateTime<Utc>>,
}
