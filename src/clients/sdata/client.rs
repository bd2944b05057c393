//! Resource client for SData dynamic resources.
//!
//! This module provides the [`SdataClient`] type, which maps CRUD and
//! business rule operations onto SData requests.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::auth::Credentials;
use crate::clients::job::JobClient;
use crate::clients::{HttpClient, HttpMethod, SdataError, SdataRequest};
use crate::config::{Password, SdataConfig, SdataUri};
use crate::error::ConfigError;
use crate::resources::requests;

/// Client for SData resources.
///
/// Every operation builds a single request, sends it through
/// [`execute_request`](Self::execute_request), and resolves to the parsed
/// JSON body or an [`SdataError`]. Nothing is retried or cached.
///
/// # Thread Safety
///
/// `SdataClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use sdata::{SdataClient, SdataConfig, SdataUri};
/// use serde_json::json;
///
/// let config = SdataConfig::builder()
///     .sdata_uri(SdataUri::new("https://crm.example.com/sdata")?)
///     .username("admin")
///     .password("secret")
///     .build()?;
///
/// let client = SdataClient::new(&config)?;
///
/// let accounts = client.read("Account", Some("AccountName like 'A%'"), None).await?;
/// let created = client.create("Account", &json!({"AccountName": "Abbott Ltd."})).await?;
/// client.delete("Account", created["$key"].as_str().unwrap_or_default()).await?;
/// ```
#[derive(Debug)]
pub struct SdataClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify SdataClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SdataClient>();
};

impl SdataClient {
    /// Creates a new client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be created.
    pub fn new(config: &SdataConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!("SData client created for {}", config.sdata_uri());
        Ok(Self { http_client })
    }

    /// Returns this client with the given credentials attached.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<Password>,
    ) -> Self {
        self.set_authentication_parameters(username, password);
        self
    }

    /// Sets the credentials used for all subsequent requests.
    ///
    /// This is typically called after a login form has been submitted.
    pub fn set_authentication_parameters(
        &mut self,
        username: impl Into<String>,
        password: impl Into<Password>,
    ) {
        self.http_client
            .set_credentials(Credentials::new(username, password));
    }

    /// Returns the configured SData root URI (ending in `/`).
    #[must_use]
    pub const fn sdata_uri(&self) -> &SdataUri {
        self.http_client.sdata_uri()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns a client for the scheduling service of this SData site.
    #[must_use]
    pub const fn jobs(&self) -> JobClient<'_> {
        JobClient::new(self)
    }

    /// Reads a resource feed.
    ///
    /// # Arguments
    ///
    /// * `resource_kind` - The resource kind (e.g., "Account")
    /// * `where_clause` - Optional SData filter expression
    /// * `query_args` - Optional extra query parameters (e.g., `select`, `count`)
    ///
    /// # Errors
    ///
    /// Returns [`SdataError`] if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut args = BTreeMap::new();
    /// args.insert("select".to_string(), "AccountName,Type".to_string());
    /// let feed = client.read("Account", Some("Type eq 'Customer'"), Some(&args)).await?;
    /// ```
    pub async fn read(
        &self,
        resource_kind: &str,
        where_clause: Option<&str>,
        query_args: Option<&BTreeMap<String, String>>,
    ) -> Result<Value, SdataError> {
        self.send(&requests::read(resource_kind, where_clause, query_args))
            .await
    }

    /// Creates a resource and returns it, including its new `$key`.
    ///
    /// # Errors
    ///
    /// Returns [`SdataError::InvalidRequest`] if `data` cannot be serialized,
    /// or any error of the request itself.
    pub async fn create<T>(&self, resource_kind: &str, data: &T) -> Result<Value, SdataError>
    where
        T: Serialize + ?Sized,
    {
        let data = to_payload(data)?;
        self.send(&requests::create(resource_kind, data)).await
    }

    /// Updates a resource. The `$key` must be part of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`SdataError::InvalidRequest`] if `data` cannot be serialized,
    /// or any error of the request itself.
    pub async fn update<T>(&self, resource_kind: &str, data: &T) -> Result<Value, SdataError>
    where
        T: Serialize + ?Sized,
    {
        let data = to_payload(data)?;
        self.send(&requests::update(resource_kind, data)).await
    }

    /// Deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns [`SdataError`] if the request fails.
    pub async fn delete(&self, resource_kind: &str, key: &str) -> Result<Value, SdataError> {
        self.send(&requests::delete(resource_kind, key)).await
    }

    /// Invokes a business rule against a record.
    ///
    /// Resolves to the rule's `response.Result`, or `None` when the rule
    /// returned nothing.
    ///
    /// # Arguments
    ///
    /// * `resource_kind` - The resource kind exposing the rule
    /// * `operation_name` - The business rule name
    /// * `record_id` - The `$key` of the target record
    /// * `parameters` - Extra request fields; names must match the rule's declared parameters
    ///
    /// # Errors
    ///
    /// Returns [`SdataError`] if the request fails.
    pub async fn call_business_rule(
        &self,
        resource_kind: &str,
        operation_name: &str,
        record_id: &str,
        parameters: Option<&Map<String, Value>>,
    ) -> Result<Option<Value>, SdataError> {
        let request =
            requests::call_business_rule(resource_kind, operation_name, record_id, parameters);
        let response = self.send(&request).await?;
        Ok(requests::business_rule_result(&response))
    }

    /// Sends a request built from a URL fragment, method, and payload.
    ///
    /// This is the primitive shared by every operation and by sub-clients
    /// such as [`JobClient`].
    ///
    /// # Errors
    ///
    /// Returns [`SdataError`] if the request fails.
    pub async fn execute_request(
        &self,
        url: &str,
        method: HttpMethod,
        payload: Option<Value>,
    ) -> Result<Value, SdataError> {
        let request = SdataRequest {
            method,
            url: url.to_string(),
            payload,
        };
        self.send(&request).await
    }

    /// Sends a prepared request descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`SdataError`] if the request fails.
    pub async fn send(&self, request: &SdataRequest) -> Result<Value, SdataError> {
        self.http_client.request(request).await
    }
}

fn to_payload<T: Serialize + ?Sized>(data: &T) -> Result<Value, SdataError> {
    serde_json::to_value(data).map_err(|e| SdataError::InvalidRequest {
        reason: e.to_string(),
    })
}
