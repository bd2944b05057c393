//! HTTP client for SData communication.
//!
//! This module provides the [`HttpClient`] type that sends
//! [`SdataRequest`] descriptors to the server, attaches authentication and
//! default headers, and normalizes responses.

use std::collections::HashMap;

use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::errors::SdataError;
use crate::clients::http_request::{HttpMethod, SdataRequest};
use crate::clients::http_response::{error_from_response, parse_body};
use crate::config::{SdataConfig, SdataUri};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the cache-busting query parameter.
pub const CACHE_BUSTING_PARAM: &str = "rnd";

/// Low-level HTTP client for an SData site.
///
/// The client handles:
/// - Absolute URL construction from the SData root URI
/// - Default headers including User-Agent and Accept
/// - Basic authentication through both authorization headers
/// - Cache busting for GET requests when enabled
/// - Response parsing and error normalization
///
/// No request is ever retried: every failure is reported exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Credentials can only be replaced through
/// `&mut self`, so they never change while a request borrows the client.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Normalized SData root URI.
    sdata_uri: SdataUri,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Credentials sent with every request.
    credentials: Credentials,
    /// Whether GET requests receive a cache-busting parameter.
    prevent_caching: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a validated configuration.
    ///
    /// Credentials from the configuration are attached when a username is
    /// configured; otherwise the client starts with empty credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &SdataConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}SData Client Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let credentials = config.username().map_or_else(Credentials::default, |username| {
            Credentials::new(username, config.password().cloned().unwrap_or_default())
        });

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            sdata_uri: config.sdata_uri().clone(),
            default_headers,
            credentials,
            prevent_caching: config.prevent_caching(),
        })
    }

    /// Returns the normalized SData root URI.
    #[must_use]
    pub const fn sdata_uri(&self) -> &SdataUri {
        &self.sdata_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the credentials sent with every request.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replaces the credentials. Takes effect on the next request.
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    /// Returns whether GET requests receive a cache-busting parameter.
    #[must_use]
    pub const fn prevent_caching(&self) -> bool {
        self.prevent_caching
    }

    /// Builds the absolute URL of a request.
    ///
    /// When cache prevention is enabled, GET requests receive a random
    /// `rnd` query parameter so that two reads never share a URL.
    #[must_use]
    pub fn request_url(&self, request: &SdataRequest) -> String {
        let mut url = self.sdata_uri.join(&request.url);
        if self.prevent_caching && request.method == HttpMethod::Get {
            let separator = if url.contains('?') { '&' } else { '?' };
            let nonce: f64 = rand::random();
            url.push(separator);
            url.push_str(&format!("{CACHE_BUSTING_PARAM}={nonce}"));
        }
        url
    }

    /// Sends a request to the SData server.
    ///
    /// # Errors
    ///
    /// Returns [`SdataError`] if:
    /// - The server answers with a structured error (`Application`)
    /// - The server answers with any other non-2xx status (`Transport`)
    /// - No response is received (`Network`)
    pub async fn request(&self, request: &SdataRequest) -> Result<Value, SdataError> {
        let url = self.request_url(request);
        tracing::debug!("Sending SData request: {} {}", request.method, url);

        let mut req_builder = self.client.request(request.method.into(), &url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        for (key, value) in self.credentials.headers() {
            req_builder = req_builder.header(key, value);
        }

        if let Some(payload) = &request.payload {
            tracing::trace!("SData request payload: {}", payload);
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(payload.to_string());
        }

        let res = req_builder.send().await?;

        let status = res.status();
        let reason = res
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
        let body_text = res.text().await?;

        if status.is_success() {
            return Ok(parse_body(&body_text));
        }

        let error = error_from_response(status.as_u16(), reason.as_deref(), &body_text);
        tracing::debug!(
            "SData request {} {} failed with status {}: {}",
            request.method,
            url,
            status.as_u16(),
            error
        );
        Err(error)
    }
}
