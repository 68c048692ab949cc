//! Organization and identity service data models
//!
//! Field names follow the AWS JSON wire format (PascalCase).

mod account;
mod identity;
mod org;
mod timestamp;

pub use account::Account;
pub use identity::IdentityCenterInstance;
pub use org::{
    EnabledServicePrincipal, FeatureSet, Organization, OrganizationState, OrganizationalUnit,
    Root,
};
