//! Error types for lzpreflight

use std::time::Duration;
use thiserror::Error;

use crate::preflight::ValidationReport;

/// Result type alias for lzpreflight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Management account with email {0} not found")]
    AccountNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Service-level errors returned by the organization and identity clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// The account is not a member of an organization.
    #[error("AWS Organizations is not in use for this account")]
    OrganizationNotInUse,

    #[error("Request throttled by {service}")]
    Throttled {
        service: &'static str,
        retry_after: Option<Duration>,
    },

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("{code}: {message}")]
    Service { code: String, message: String },

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Listing returned more than {0} results")]
    TooManyResults(usize),
}

impl ApiError {
    /// Whether the retry policy should try the call again.
    pub fn is_throttling(&self) -> bool {
        matches!(self, ApiError::Throttled { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to service endpoint".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `lzpreflight init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "AWS credentials not configured. Set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY, choose a profile with --profile, or add a credentials block to the config file."
    )]
    MissingCredentials,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Aggregated failure for a validation run with one or more issues.
#[derive(Debug)]
pub struct ValidationError {
    pub report: ValidationReport,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AWS Organization validation has {} issue(s):",
            self.report.issue_count()
        )?;
        for diagnostic in self.report.diagnostics() {
            write!(f, "\n{}", diagnostic)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
