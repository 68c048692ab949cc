//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer (clap resolves both); [`GlobalOptions::apply`]
/// lays it over a loaded config.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.lzpreflight/config.yaml)
    pub config: Option<String>,

    /// Region for the Organizations client
    pub management_region: Option<String>,

    /// Workload region for the Identity Center client
    pub region: Option<String>,

    /// Caller identifier appended to the User-Agent
    pub solution_id: Option<String>,

    /// Named AWS profile for the credential chain
    pub profile: Option<String>,

    /// Custom Organizations endpoint for development/testing
    pub organizations_endpoint: Option<String>,

    /// Custom Identity Center endpoint for development/testing
    pub identity_center_endpoint: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            management_region: cli.management_region.clone(),
            region: cli.region.clone(),
            solution_id: cli.solution_id.clone(),
            profile: cli.profile.clone(),
            organizations_endpoint: cli.organizations_endpoint.clone(),
            identity_center_endpoint: cli.identity_center_endpoint.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Override config values with anything given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(region) = &self.management_region {
            config.management_region = region.clone();
        }

        let optional_overrides = [
            (&self.region, &mut config.home_region),
            (&self.solution_id, &mut config.solution_id),
            (&self.profile, &mut config.profile),
            (&self.organizations_endpoint, &mut config.organizations_endpoint),
            (
                &self.identity_center_endpoint,
                &mut config.identity_center_endpoint,
            ),
        ];
        for (flag, value) in optional_overrides {
            if flag.is_some() {
                *value = flag.clone();
            }
        }
    }
}
