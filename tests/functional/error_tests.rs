//! Error scenario functional tests for lzpreflight
//!
//! These tests verify that lzpreflight returns actionable error messages
//! when lookups or requests fail.

use predicates::prelude::*;

use super::FunctionalTestContext;

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_unknown_email_returns_not_found() {
    let ctx = FunctionalTestContext::new();

    let email = "lzpreflight-functest-nobody@example.invalid";
    let assert = ctx.run(&["management-account", "--email", email]).failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    assert!(
        stderr.contains("not found") || stderr.contains("not in use"),
        "Expected not-found error, got: {}",
        stderr
    );
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_unknown_parent_is_reported() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["ous", "--parent", "ou-zzzz-00000000"])
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_invalid_credentials_are_rejected() {
    let ctx = FunctionalTestContext::new();

    ctx.command(&["accounts"])
        .env("AWS_ACCESS_KEY_ID", "AKIAINVALIDINVALID00")
        .env("AWS_SECRET_ACCESS_KEY", "invalid")
        .env_remove("AWS_SESSION_TOKEN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
