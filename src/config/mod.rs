//! Configuration types for the SData client library.
//!
//! Configuration is two-phase: an [`SdataConfigBuilder`] is populated first
//! (for instance from environment-specific settings), then
//! [`SdataConfigBuilder::build`] validates it and produces an immutable
//! [`SdataConfig`] from which clients are created.
//!
//! # Overview
//!
//! - [`SdataConfig`]: The validated configuration
//! - [`SdataConfigBuilder`]: A builder for constructing [`SdataConfig`] instances
//! - [`SdataUri`]: A validated, normalized SData root URI
//! - [`Password`]: A password newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use sdata::{SdataConfig, SdataUri};
//!
//! let config = SdataConfig::builder()
//!     .sdata_uri(SdataUri::new("https://crm.example.com/sdata").unwrap())
//!     .username("admin")
//!     .password("secret")
//!     .prevent_caching(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.sdata_uri().as_ref(), "https://crm.example.com/sdata/");
//! ```

mod newtypes;

pub use newtypes::{Password, SdataUri};
pub(crate) use newtypes::DYNAMIC_RESOURCE_PATH;

use crate::error::ConfigError;

/// Configuration for an SData client.
///
/// # Thread Safety
///
/// `SdataConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct SdataConfig {
    sdata_uri: SdataUri,
    username: Option<String>,
    password: Option<Password>,
    prevent_caching: bool,
    user_agent_prefix: Option<String>,
}

impl SdataConfig {
    /// Creates a new builder for constructing an `SdataConfig`.
    #[must_use]
    pub fn builder() -> SdataConfigBuilder {
        SdataConfigBuilder::new()
    }

    /// Returns the normalized SData root URI.
    #[must_use]
    pub const fn sdata_uri(&self) -> &SdataUri {
        &self.sdata_uri
    }

    /// Returns the configured username, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the configured password, if any.
    #[must_use]
    pub const fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    /// Returns whether GET requests receive a cache-busting parameter.
    #[must_use]
    pub const fn prevent_caching(&self) -> bool {
        self.prevent_caching
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SdataConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SdataConfig>();
};

/// Builder for constructing [`SdataConfig`] instances.
///
/// The only required field is `sdata_uri`.
///
/// # Defaults
///
/// - `username` / `password`: `None` (credentials may be attached later)
/// - `prevent_caching`: `false`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct SdataConfigBuilder {
    sdata_uri: Option<SdataUri>,
    username: Option<String>,
    password: Option<Password>,
    prevent_caching: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl SdataConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the SData root URI (required).
    #[must_use]
    pub fn sdata_uri(mut self, uri: SdataUri) -> Self {
        self.sdata_uri = Some(uri);
        self
    }

    /// Sets the username used for Basic authentication.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password used for Basic authentication.
    #[must_use]
    pub fn password(mut self, password: impl Into<Password>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Enables or disables the cache-busting parameter on GET requests.
    ///
    /// Caching is better controlled on the server side; this is a fallback
    /// for deployments where that is not possible.
    #[must_use]
    pub const fn prevent_caching(mut self, prevent: bool) -> Self {
        self.prevent_caching = Some(prevent);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SdataConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `sdata_uri` is not set.
    pub fn build(self) -> Result<SdataConfig, ConfigError> {
        let sdata_uri = self
            .sdata_uri
            .ok_or(ConfigError::MissingRequiredField { field: "sdata_uri" })?;

        Ok(SdataConfig {
            sdata_uri,
            username: self.username,
            password: self.password,
            prevent_caching: self.prevent_caching.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
