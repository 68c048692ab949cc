//! AWS Organizations and IAM Identity Center clients

pub mod api;
pub mod aws;
pub mod credentials;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod rate_limit;
pub mod retry;
pub mod sigv4;

pub use api::{IdentityCenterApi, OrganizationsApi};
pub use aws::{AwsIdentityCenterClient, AwsOrganizationsClient, ClientSettings};
pub use credentials::resolve_credentials;
pub use pagination::{collect_all, paginate};
pub use retry::RetryPolicy;
pub use sigv4::Credentials;
