//! Request descriptors for the SData client library.
//!
//! Every high-level operation is first rendered into an [`SdataRequest`]: a
//! URL fragment relative to the SData root, an [`HttpMethod`], and an
//! optional JSON payload. The descriptor is then handed to
//! [`SdataClient::execute_request`](crate::SdataClient::execute_request).

use std::fmt;

use serde_json::Value;

/// HTTP methods used by the SData protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reading resources.
    #[default]
    Get,
    /// HTTP POST method for creating resources and invoking services.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A request to be sent to the SData server.
///
/// # Example
///
/// ```rust
/// use sdata::clients::{HttpMethod, SdataRequest};
/// use serde_json::json;
///
/// let request = SdataRequest::new(HttpMethod::Post, "slx/dynamic/-/Account?format=json")
///     .with_payload(json!({"AccountName": "Abbott Ltd."}));
///
/// assert_eq!(request.method, HttpMethod::Post);
/// assert!(request.payload.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SdataRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The URL fragment, relative to the SData root URI.
    pub url: String,
    /// The JSON payload, if any.
    pub payload: Option<Value>,
}

impl SdataRequest {
    /// Creates a request without payload.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            payload: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Attaches a JSON payload.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }
}
