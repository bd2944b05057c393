//! Basic authentication credentials.

use base64::prelude::*;

use crate::config::Password;

/// Standard HTTP authorization header.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Custom authorization header read by SData when challenges are disabled.
pub const CUSTOM_AUTHORIZATION_HEADER: &str = "X-Authorization";

/// Header selecting the server's authentication failure mode.
pub const AUTHORIZATION_MODE_HEADER: &str = "X-Authorization-Mode";

/// Value of [`AUTHORIZATION_MODE_HEADER`] that suppresses the 401 challenge.
pub const NO_CHALLENGE_MODE: &str = "no-challenge";

/// A username/password pair used for SData Basic authentication.
///
/// Unset credentials are represented by empty strings and still produce a
/// header value (`Basic Og==`, the encoding of `":"`).
///
/// # Example
///
/// ```rust
/// use sdata::auth::Credentials;
///
/// let anonymous = Credentials::default();
/// assert_eq!(anonymous.basic_auth_value(), "Basic Og==");
///
/// let credentials = Credentials::new("admin", "");
/// assert_eq!(credentials.username(), "admin");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: Password,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<Password>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the `Basic <base64(username:password)>` header value.
    #[must_use]
    pub fn basic_auth_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password.as_ref());
        format!("Basic {}", BASE64_STANDARD.encode(raw))
    }

    /// Returns every authentication header sent with a request.
    ///
    /// Both authorization headers carry the same value.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, String); 3] {
        let value = self.basic_auth_value();
        [
            (AUTHORIZATION_HEADER, value.clone()),
            (CUSTOM_AUTHORIZATION_HEADER, value),
            (AUTHORIZATION_MODE_HEADER, NO_CHALLENGE_MODE.to_string()),
        ]
    }
}
