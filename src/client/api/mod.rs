//! API trait definitions split by service
//!
//! - [`OrganizationsApi`] - organization structure and feature set
//! - [`IdentityCenterApi`] - IAM Identity Center instances

mod identity_center;
mod organizations;

pub use identity_center::IdentityCenterApi;
pub use organizations::OrganizationsApi;
