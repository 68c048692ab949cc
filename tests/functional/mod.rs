//! Functional test harness for lzpreflight
//!
//! Provides a test context for running read-only commands against a real
//! AWS organization. Tests are opt-in via the `functional-tests` feature.
//! Credentials come from the AWS default provider chain of the test host.

use std::env;
use std::path::PathBuf;
use std::process::Command;

#[allow(deprecated)]
use assert_cmd::cargo::cargo_bin;
#[allow(unused_imports)]
use assert_cmd::prelude::*;

pub mod error_tests;
pub mod read_tests;

/// Environment variable naming the management account email for lookup tests
pub const MANAGEMENT_EMAIL_ENV: &str = "LZPREFLIGHT_FUNCTIONAL_MANAGEMENT_EMAIL";

/// Context for functional tests providing command execution.
pub struct FunctionalTestContext {
    /// Config file to use (from LZPREFLIGHT_CONFIG)
    pub config: Option<String>,
    /// Path to the lzpreflight binary
    pub binary_path: PathBuf,
}

impl FunctionalTestContext {
    /// Create a new test context.
    pub fn new() -> Self {
        Self {
            config: env::var("LZPREFLIGHT_CONFIG").ok(),
            binary_path: cargo_bin!("lzpreflight").to_path_buf(),
        }
    }

    /// Build a Command with config settings applied.
    ///
    /// This does NOT execute the command - use `run()` for that.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        if let Some(ref config) = self.config {
            cmd.args(["--config", config]);
        }
        cmd.args(args);
        cmd
    }

    /// Execute command and return an assertion object for chaining.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command(args).assert()
    }

    /// Execute command and expect success, returning stdout as String.
    ///
    /// Panics if the command fails (non-zero exit code).
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "Command failed: lzpreflight {}\nstderr: {}",
                args.join(" "),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run a command that needs an organization to exist.
    ///
    /// Accounts outside an organization get "not in use"; that passes the
    /// test with a note instead of failing it.
    pub fn run_organization_dependent(&self, args: &[&str]) -> Option<String> {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if output.status.success() {
            return Some(String::from_utf8_lossy(&output.stdout).to_string());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains("not in use") {
            eprintln!(
                "\n⚠️  SKIPPED: lzpreflight {} needs an existing organization",
                args.join(" ")
            );
            return None;
        }
        panic!(
            "Command failed: lzpreflight {}\nstderr: {}",
            args.join(" "),
            stderr
        );
    }
}

impl Default for FunctionalTestContext {
    fn default() -> Self {
        Self::new()
    }
}
