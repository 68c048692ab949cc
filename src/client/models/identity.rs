//! IAM Identity Center models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// IAM Identity Center instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdentityCenterInstance {
    /// Instance ARN
    pub instance_arn: String,

    /// Identity store backing the instance
    #[serde(default)]
    pub identity_store_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_account_id: Option<String>,

    /// Instance status (CREATE_IN_PROGRESS, DELETE_IN_PROGRESS, ACTIVE)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(
        default,
        with = "timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<DateTime<Utc>>,
}
