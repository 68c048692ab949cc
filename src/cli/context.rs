//! Command execution context
//!
//! Loads configuration, applies global flags, resolves credentials and builds
//! the service clients every organization command needs.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{
    AwsIdentityCenterClient, AwsOrganizationsClient, ClientSettings, Credentials,
    resolve_credentials,
};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, clients, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with flag overrides applied
    pub config: Config,
    /// Organizations client in the management region
    pub organizations: AwsOrganizationsClient,
    /// Identity Center client in the workload region
    pub identity_center: AwsIdentityCenterClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded, no credential source yields
    /// credentials, or an endpoint override is not a valid URL.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;
        opts.apply(&mut config);
        config.validate()?;

        let credentials = resolve_credentials(
            config.credentials.as_ref(),
            config.profile.as_deref(),
            &config.management_region,
        )
        .await?;

        let management = client_settings(
            &config,
            &config.management_region,
            config.organizations_endpoint.clone(),
            credentials.clone(),
        );
        let workload = client_settings(
            &config,
            config.workload_region(),
            config.identity_center_endpoint.clone(),
            credentials,
        );

        debug!(
            "Management region {}, workload region {}, caller {}",
            management.region, workload.region, management.caller_identifier
        );

        Ok(Self {
            organizations: AwsOrganizationsClient::new(management)?,
            identity_center: AwsIdentityCenterClient::new(workload)?,
            config,
            format: opts.format,
        })
    }
}

/// Client settings for one region, sharing credentials and retry policy.
fn client_settings(
    config: &Config,
    region: &str,
    endpoint: Option<String>,
    credentials: Credentials,
) -> ClientSettings {
    ClientSettings {
        endpoint,
        retry: config.retry_policy(),
        max_items: config.max_items,
        ..ClientSettings::new(region, config.caller_identifier(), credentials)
    }
}
