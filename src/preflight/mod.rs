//! Landing zone pre-flight checks
//!
//! Stateless functions over explicit client handles:
//!
//! - [`inventory`] - collectors for roots, OUs, accounts, services and
//!   Identity Center instances
//! - [`probes`] - one compatibility question each
//! - [`validate`] - the orchestrator that aggregates probe diagnostics
//! - [`features`] - the idempotent all-features upgrade
//! - [`lookup`] - management account resolution by email

pub mod features;
pub mod inventory;
pub mod lookup;
pub mod probes;
pub mod report;
pub mod validate;

pub use features::FeatureChange;
pub use inventory::{
    get_enabled_services, get_organization_accounts, get_organizational_units_for_root,
    get_organizations_root,
};
pub use lookup::get_management_account_id;
pub use report::{CheckOutcome, CheckStatus, ValidationReport};
pub use validate::validate_organization;
