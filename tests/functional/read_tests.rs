//! Read-only functional tests for lzpreflight
//!
//! These tests list organization state and never modify it.

use predicates::prelude::*;

use super::{FunctionalTestContext, MANAGEMENT_EMAIL_ENV};

// ============================================================================
// Status Command
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_status_shows_config() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["status"])
        .success()
        .stdout(predicate::str::contains("Configuration"))
        .stdout(predicate::str::contains("Management region"));
}

// ============================================================================
// Organization Structure
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_root_json_format() {
    let ctx = FunctionalTestContext::new();

    if let Some(stdout) = ctx.run_organization_dependent(&["root", "--format", "json"]) {
        let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
        assert!(
            value["data"]["Id"]
                .as_str()
                .is_some_and(|id| id.starts_with("r-"))
        );
    }
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_accounts_include_management_account() {
    let ctx = FunctionalTestContext::new();

    if let Some(stdout) = ctx.run_organization_dependent(&["accounts", "--format", "json"]) {
        let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
        let accounts = value["data"].as_array().expect("account array");
        assert!(!accounts.is_empty());
    }
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_ous_and_services_list() {
    let ctx = FunctionalTestContext::new();

    ctx.run_organization_dependent(&["ous", "--format", "table"]);
    ctx.run_organization_dependent(&["services", "--format", "table"]);
}

// ============================================================================
// Management Account Lookup
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_management_account_lookup() {
    let Ok(email) = std::env::var(MANAGEMENT_EMAIL_ENV) else {
        eprintln!("\n⚠️  SKIPPED: set {} to run this test", MANAGEMENT_EMAIL_ENV);
        return;
    };
    let ctx = FunctionalTestContext::new();

    let stdout = ctx.run_success(&["management-account", "--email", &email, "--format", "table"]);
    let id = stdout.trim();
    assert_eq!(id.len(), 12, "Expected a 12-digit account ID, got {}", id);
    assert!(id.chars().all(|c| c.is_ascii_digit()));
}
