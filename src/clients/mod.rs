//! HTTP client types for SData communication.
//!
//! This module provides the client layer for making authenticated requests
//! to an SData site and normalizing their results.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client sending requests to the server
//! - [`SdataRequest`]: A request descriptor (URL fragment, method, payload)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`SdataError`]: The single error channel of every request
//! - [`sdata::SdataClient`]: Resource operations (read, create, update, delete, business rules)
//! - [`job::JobClient`]: Scheduling service (trigger jobs, poll executions)
//!
//! # Error Normalization
//!
//! - 2xx responses resolve to the parsed JSON body
//! - Error bodies shaped `[{"message": "..."}]` reject with that message
//! - Any other failure rejects with the response's status text, or the
//!   transport error when no response was received
//!
//! Requests are never retried.

mod errors;
mod http_client;
mod http_request;
pub mod http_response;
pub mod job;
pub mod sdata;

pub use errors::SdataError;
pub use http_client::{HttpClient, CACHE_BUSTING_PARAM, SDK_VERSION};
pub use http_request::{HttpMethod, SdataRequest};

pub use job::JobClient;
pub use sdata::SdataClient;
