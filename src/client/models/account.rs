//! Member account models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Account that belongs to the organization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    /// 12-digit account ID
    pub id: String,

    /// Account name
    #[serde(default)]
    pub name: String,

    /// Root user email address
    #[serde(default)]
    pub email: String,

    /// Account status (ACTIVE, SUSPENDED, PENDING_CLOSURE)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Account ARN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// How the account joined (INVITED, CREATED)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_method: Option<String>,

    /// When the account joined the organization
    #[serde(
        default,
        with = "timestamp::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub joined_timestamp: Option<DateTime<Utc>>,
}

impl Account {
    /// `name -> email` label used in diagnostics.
    pub fn label(&self) -> String {
        format!("{} -> {}", self.name, self.email)
    }
}
