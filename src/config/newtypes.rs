//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Path segment of the dynamic resource area, relative to the SData root.
pub(crate) const DYNAMIC_RESOURCE_PATH: &str = "slx/dynamic/-";

/// A validated root URI of an SData site.
///
/// The URI is normalized to end with a trailing slash so that relative
/// request fragments can be appended directly.
///
/// # Accepted Formats
///
/// - `https://crm.example.com/sdata` - normalized to `https://crm.example.com/sdata/`
/// - `https://crm.example.com/sdata/` - used as-is
///
/// URIs that already include the dynamic resource path (`slx/dynamic/-`) are
/// rejected: the client appends that path itself.
///
/// # Example
///
/// ```rust
/// use sdata::SdataUri;
///
/// let uri = SdataUri::new("http://localhost:3333/sdata").unwrap();
/// assert_eq!(uri.as_ref(), "http://localhost:3333/sdata/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SdataUri {
    uri: String,
}

impl SdataUri {
    /// Creates a new validated SData URI.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if the URI is empty
    /// - [`ConfigError::InvalidSdataUri`] if the URI has no scheme or host
    /// - [`ConfigError::DynamicResourcePath`] if the URI points below the site root
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let mut uri = Into::<String>::into(uri).trim().to_string();

        if uri.is_empty() {
            return Err(ConfigError::MissingRequiredField { field: "sdata_uri" });
        }

        let scheme_end = uri
            .find("://")
            .ok_or_else(|| ConfigError::InvalidSdataUri { uri: uri.clone() })?;

        let scheme = &uri[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidSdataUri { uri });
        }

        let host_start = scheme_end + 3;
        let host_end = uri[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(uri.len(), |i| host_start + i);
        if host_start >= host_end {
            return Err(ConfigError::InvalidSdataUri { uri });
        }

        if !uri.ends_with('/') {
            uri.push('/');
        }

        if uri.contains(DYNAMIC_RESOURCE_PATH) {
            return Err(ConfigError::DynamicResourcePath { uri });
        }

        Ok(Self { uri })
    }

    /// Joins a relative request fragment onto the root URI.
    #[must_use]
    pub fn join(&self, fragment: &str) -> String {
        format!("{}{fragment}", self.uri)
    }
}

impl AsRef<str> for SdataUri {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for SdataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

impl Serialize for SdataUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.uri)
    }
}

impl<'de> Deserialize<'de> for SdataUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A password used for SData Basic authentication.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)` instead of the actual password.
///
/// # Example
///
/// ```rust
/// use sdata::Password;
///
/// let password = Password::new("hunter2");
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// assert_eq!(password.as_ref(), "hunter2");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a password value. Empty passwords are allowed.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdata_uri_appends_trailing_slash() {
        let uri = SdataUri::new("http://localhost:3333/sdata").unwrap();
        assert_eq!(uri.as_ref(), "http://localhost:3333/sdata/");
    }

    #[test]
    fn test_sdata_uri_trims_surrounding_whitespace() {
        let uri = SdataUri::new(String::from("  https://crm.example.com/sdata \n")).unwrap();
        assert_eq!(uri.as_ref(), "https://crm.example.com/sdata/");
    }

    #[test]
    fn test_sdata_uri_normalization_is_idempotent() {
        let once = SdataUri::new("https://crm.example.com/sdata").unwrap();
        let twice = SdataUri::new(once.as_ref()).unwrap();
        assert_eq!(once, twice);
        assert!(!twice.as_ref().ends_with("//"));
    }

    #[test]
    fn test_sdata_uri_rejects_empty() {
        assert!(matches!(
            SdataUri::new(""),
            Err(ConfigError::MissingRequiredField { field: "sdata_uri" })
        ));
        assert!(matches!(
            SdataUri::new("   "),
            Err(ConfigError::MissingRequiredField { field: "sdata_uri" })
        ));
    }

    #[test]
    fn test_sdata_uri_rejects_dynamic_resource_path() {
        for uri in [
            "http://host/sdata/slx/dynamic/-/",
            "http://host/sdata/slx/dynamic/-",
            "https://host:3333/sdata/slx/dynamic/-/Account",
        ] {
            assert!(
                matches!(
                    SdataUri::new(uri),
                    Err(ConfigError::DynamicResourcePath { .. })
                ),
                "expected {uri} to be rejected"
            );
        }
    }

    #[test]
    fn test_sdata_uri_rejects_malformed() {
        assert!(matches!(
            SdataUri::new("crm.example.com/sdata/"),
            Err(ConfigError::InvalidSdataUri { .. })
        ));
        assert!(matches!(
            SdataUri::new("https://"),
            Err(ConfigError::InvalidSdataUri { .. })
        ));
        assert!(matches!(
            SdataUri::new("://host/sdata"),
            Err(ConfigError::InvalidSdataUri { .. })
        ));
    }

    #[test]
    fn test_sdata_uri_join() {
        let uri = SdataUri::new("http://host/sdata").unwrap();
        assert_eq!(
            uri.join("slx/dynamic/-/Account?format=json"),
            "http://host/sdata/slx/dynamic/-/Account?format=json"
        );
    }

    #[test]
    fn test_sdata_uri_deserialization_validates() {
        let uri: SdataUri = serde_json::from_str(r#""http://host/sdata""#).unwrap();
        assert_eq!(uri.as_ref(), "http://host/sdata/");

        let result: Result<SdataUri, _> =
            serde_json::from_str(r#""http://host/sdata/slx/dynamic/-/""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_password_masks_value_in_debug() {
        let password = Password::new("super-secret");
        let debug_output = format!("{password:?}");
        assert_eq!(debug_output, "Password(*****)");
        assert!(!debug_output.contains("super-secret"));
    }
}
