//! Error types for the SData client library.
//!
//! This module contains the configuration errors raised while building a
//! [`SdataConfig`](crate::SdataConfig) or an [`SdataClient`](crate::SdataClient).
//! Errors raised while talking to the server live in
//! [`clients::SdataError`](crate::clients::SdataError).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. No request is ever attempted with an invalid
//! configuration.
//!
//! # Example
//!
//! ```rust
//! use sdata::{ConfigError, SdataUri};
//!
//! let result = SdataUri::new("https://crm.example.com/sdata/slx/dynamic/-/");
//! assert!(matches!(result, Err(ConfigError::DynamicResourcePath { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The SData URI could not be parsed.
    #[error("Invalid SData URI '{uri}'. Please provide a URL with scheme and host (e.g., 'https://crm.example.com/sdata/').")]
    InvalidSdataUri {
        /// The invalid URI that was provided.
        uri: String,
    },

    /// The SData URI points at the dynamic resource path instead of the site root.
    #[error("SData URI '{uri}' should point to the root of the SData site (i.e. /sdata/, not /sdata/slx/dynamic/-/).")]
    DynamicResourcePath {
        /// The URI that was provided.
        uri: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The reason reported by the HTTP library.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "sdata_uri" };
        let message = error.to_string();
        assert!(message.contains("sdata_uri"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_dynamic_resource_path_error_message() {
        let error = ConfigError::DynamicResourcePath {
            uri: "http://host/sdata/slx/dynamic/-/".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("http://host/sdata/slx/dynamic/-/"));
        assert!(message.contains("root of the SData site"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingRequiredField { field: "sdata_uri" };
        let _: &dyn std::error::Error = &error;
    }
}
