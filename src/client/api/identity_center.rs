//! IAM Identity Center API trait

use async_trait::async_trait;

use crate::client::models::IdentityCenterInstance;
use crate::client::pagination::{DEFAULT_MAX_ITEMS, Page};
use crate::error::Result;

/// Identity Center admin operations
#[async_trait]
pub trait IdentityCenterApi: Send + Sync {
    /// List Identity Center instances visible in the client's region
    async fn list_instances(
        &self,
        next_token: Option<String>,
    ) -> Result<Page<IdentityCenterInstance>>;

    /// Most items a single listing may collect
    fn max_items(&self) -> usize {
        DEFAULT_MAX_ITEMS
    }
}
