//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Invite base URL must be http(s)")]
    InvalidInviteBaseUrl,

    #[error("Retention days must be at least 1")]
    InvalidRetentionDays,

    #[error("Sweep interval must be at least 1 second")]
    InvalidSweepInterval,
}
