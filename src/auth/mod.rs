//! Authentication types for the SData client library.
//!
//! SData accepts HTTP Basic credentials. The client sends them twice: once
//! under the standard `Authorization` header and once under the custom
//! `X-Authorization` header, together with `X-Authorization-Mode: no-challenge`.
//! With the custom pair present the server reports authentication failures
//! as a regular error response instead of a `WWW-Authenticate` challenge, so
//! user agents never intercept the failure with a native login prompt.
//!
//! # Overview
//!
//! - [`Credentials`]: A username/password pair and its Basic header value
//!
//! # Example
//!
//! ```rust
//! use sdata::auth::Credentials;
//!
//! let credentials = Credentials::new("admin", "secret");
//! assert_eq!(credentials.basic_auth_value(), "Basic YWRtaW46c2VjcmV0");
//! ```

mod credentials;

pub use credentials::{
    Credentials, AUTHORIZATION_HEADER, AUTHORIZATION_MODE_HEADER, CUSTOM_AUTHORIZATION_HEADER,
    NO_CHALLENGE_MODE,
};
