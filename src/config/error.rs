//! Configuration error types

use thiserror::Error;

/// Failure to read or accept the configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration rejected: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that the server cannot run with
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Named after the environment variable suffix to set.
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("port must be non-zero")]
    InvalidPort,

    #[error("cannot bind to host {0:?}")]
    InvalidHost(String),

    #[error("timeout out of range")]
    InvalidTimeout,

    #[error("request timeout ({request_secs}s) must be longer than the model timeout ({ai_secs}s)")]
    RequestTimeoutTooShort { request_secs: u64, ai_secs: u64 },

    #[error("temperature must lie in 0.0..=2.0")]
    InvalidTemperature,
}
