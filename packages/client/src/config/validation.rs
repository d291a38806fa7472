//! Configuration validation

use std::time::Duration;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),

    #[error("Invalid proxy: {0}")]
    InvalidProxy(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Validate timeout duration
///
/// # Errors
///
/// Returns `ConfigurationError::InvalidTimeout` if:
/// - The timeout duration is zero
/// - The timeout duration exceeds 1 hour (3600 seconds)
pub fn validate_timeout(timeout: Duration, name: &str) -> ConfigResult<()> {
    if timeout.is_zero() {
        return Err(ConfigurationError::InvalidTimeout(format!(
            "{name} cannot be zero"
        )));
    }
    if timeout > Duration::from_secs(3600) {
        return Err(ConfigurationError::InvalidTimeout(format!(
            "{name} cannot exceed 1 hour"
        )));
    }
    Ok(())
}
