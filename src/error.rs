//! Error types for loading and configuring the destination catalog
//!
//! Catalog queries themselves never fail. Only reading the payload, parsing it,
//! and validating configuration can produce a [`CatalogError`].

use thiserror::Error;

/// Main error type for the destination catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Destination payload could not be interpreted
    #[error("Data error: {message}")]
    Data { message: String },

    /// Catalog invariants violated (e.g. duplicate ids)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON decoding errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new data error
    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            CatalogError::Data { message } => {
                format!("Destination data could not be read: {message}")
            }
            CatalogError::Validation { message } => {
                format!("Destination data is inconsistent: {message}")
            }
            CatalogError::Io { .. } => {
                "File operation failed. Please check the data path and file permissions."
                    .to_string()
            }
            CatalogError::Json { source } => {
                format!("Destination data is not valid JSON (line {}).", source.line())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = CatalogError::config("bad level");
        assert!(matches!(config_err, CatalogError::Config { .. }));

        let data_err = CatalogError::data("empty payload");
        assert!(matches!(data_err, CatalogError::Data { .. }));

        let validation_err = CatalogError::validation("duplicate id aruba");
        assert!(matches!(validation_err, CatalogError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = CatalogError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = CatalogError::validation("duplicate id aruba");
        assert!(validation_err.user_message().contains("duplicate id aruba"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("[1, 2").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Json { .. }));
        assert!(err.user_message().contains("line 1"));
    }
}
