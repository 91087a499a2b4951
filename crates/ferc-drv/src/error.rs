//! Error handling module for the ferc CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the ferc CLI application.
#[derive(Error, Debug)]
pub enum FercError {
    /// Error when a configuration value is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a configuration file cannot be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using FercError.
pub type Result<T> = std::result::Result<T, FercError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = FercError::Config("invalid color mode 'sometimes'".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid color mode 'sometimes'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ferc_err: FercError = io_err.into();
        assert!(matches!(ferc_err, FercError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not [ valid").unwrap_err();
        let ferc_err: FercError = toml_err.into();
        assert!(matches!(ferc_err, FercError::Toml(_)));
    }
}
