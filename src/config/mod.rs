//! Configuration management for lzpreflight

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::pagination::DEFAULT_MAX_ITEMS;
use crate::client::{Credentials, RetryPolicy};
use crate::error::{ConfigError, Result};

/// Region the Organizations control plane is called in when none is configured
pub const DEFAULT_MANAGEMENT_REGION: &str = "us-east-1";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Region for the Organizations client
    #[serde(default = "default_management_region")]
    pub management_region: String,

    /// Workload region for the Identity Center client (defaults to the management region)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_region: Option<String>,

    /// Caller identifier appended to the User-Agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_id: Option<String>,

    /// Custom Organizations endpoint for development/testing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizations_endpoint: Option<String>,

    /// Custom Identity Center endpoint for development/testing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_center_endpoint: Option<String>,

    /// Static credentials; the AWS default provider chain is used otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,

    /// Named profile from the shared AWS config files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Throttling retry settings
    #[serde(default)]
    pub retry: RetrySettings,

    /// Most items collected from a single listing
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

/// Retry settings for throttled calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrySettings {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_management_region() -> String {
    DEFAULT_MANAGEMENT_REGION.to_string()
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_max_attempts() -> u32 {
    10
}

fn default_base_delay_ms() -> u64 {
    100
}

fn default_max_delay_ms() -> u64 {
    20_000
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            management_region: default_management_region(),
            home_region: None,
            solution_id: None,
            organizations_endpoint: None,
            identity_center_endpoint: None,
            credentials: None,
            profile: None,
            retry: RetrySettings::default(),
            max_items: default_max_items(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".lzpreflight").join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location.
    ///
    /// A missing file at the default location yields the default
    /// configuration; a missing explicit path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;
        if path.is_none() && !resolved.exists() {
            return Ok(Self::default());
        }
        Self::load_from(resolved)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.management_region.trim().is_empty() {
            return Err(
                ConfigError::Invalid("management_region must not be empty".to_string()).into(),
            );
        }
        if self.max_items == 0 {
            return Err(
                ConfigError::Invalid("max_items must be greater than 0".to_string()).into(),
            );
        }
        if self.retry.base_delay_ms > self.retry.max_delay_ms {
            return Err(ConfigError::Invalid(
                "retry.base_delay_ms must not exceed retry.max_delay_ms".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Region for the Identity Center client
    pub fn workload_region(&self) -> &str {
        self.home_region.as_deref().unwrap_or(&self.management_region)
    }

    /// Caller identifier, defaulting to the tool name
    pub fn caller_identifier(&self) -> &str {
        self.solution_id.as_deref().unwrap_or(env!("CARGO_PKG_NAME"))
    }

    /// Build the retry policy for service calls
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry.max_attempts,
            Duration::from_millis(self.retry.base_delay_ms),
            Duration::from_millis(self.retry.max_delay_ms),
        )
    }
}
