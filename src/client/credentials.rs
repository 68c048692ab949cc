//! Credential resolution
//!
//! Static credentials from the config file win. Everything else goes through
//! the AWS default provider chain: environment variables, shared profiles,
//! SSO, web identity, container credentials and the instance role.

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use log::debug;

use super::sigv4::Credentials;
use crate::error::{ConfigError, Result};

/// Resolve signing credentials for one invocation.
///
/// `profile` selects a named profile from the shared config files; without
/// it the chain honours `AWS_PROFILE`.
pub async fn resolve_credentials(
    configured: Option<&Credentials>,
    profile: Option<&str>,
    region: &str,
) -> Result<Credentials> {
    if let Some(credentials) = configured {
        debug!("Using static credentials from the config file");
        return Ok(credentials.clone());
    }

    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    let sdk_config = loader.load().await;

    let provider = sdk_config
        .credentials_provider()
        .ok_or(ConfigError::MissingCredentials)?;
    from_provider(&provider).await
}

/// Ask a provider for credentials once.
async fn from_provider<P>(provider: &P) -> Result<Credentials>
where
    P: ProvideCredentials,
{
    let credentials = provider.provide_credentials().await.map_err(|err| {
        debug!("Credential provider chain failed: {}", err);
        ConfigError::MissingCredentials
    })?;

    Ok(Credentials {
        access_key_id: credentials.access_key_id().to_string(),
        secret_access_key: credentials.secret_access_key().to_string(),
        session_token: credentials.session_token().map(str::to_string),
    })
}
