//! # SData Client
//!
//! A Rust client for SData resource services, mapping CRUD operations,
//! business rule invocations, and background jobs onto the SData protocol.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe, two-phase configuration via [`SdataConfig`] and [`SdataConfigBuilder`]
//! - A validated, normalized root URI ([`SdataUri`])
//! - Resource operations via [`SdataClient`]: read, create, update, delete, business rules
//! - Job triggering and execution polling via [`JobClient`]
//! - Basic authentication sent through both `Authorization` and
//!   `X-Authorization`, so authentication failures reach the caller as errors
//!   instead of a login challenge
//! - A single error channel ([`SdataError`]) for every request
//!
//! ## Quick Start
//!
//! ```rust
//! use sdata::{SdataConfig, SdataUri};
//!
//! let config = SdataConfig::builder()
//!     .sdata_uri(SdataUri::new("https://crm.example.com/sdata").unwrap())
//!     .username("admin")
//!     .password("secret")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.sdata_uri().as_ref(), "https://crm.example.com/sdata/");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use sdata::{SdataClient, SdataConfig, SdataUri};
//! use serde_json::json;
//!
//! let client = SdataClient::new(&config)?;
//!
//! // Read with a filter; spaces are sent as %20
//! let feed = client.read("Account", Some("AccountName eq 'Abbott Ltd.'"), None).await?;
//!
//! // Update by $key
//! client.update("Account", &json!({"$key": "AA2EK0013031", "Type": "Customer"})).await?;
//!
//! // Trigger a job and poll it
//! let jobs = client.jobs();
//! if let Some(trigger_id) = jobs.trigger_job("Saleslogix.Reporting.Jobs.CrystalReportsJob", None, None).await? {
//!     let status = jobs.get_execution_status(&trigger_id).await?;
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Misconfigured URIs are rejected before any request
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Every failure is surfaced exactly once

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{Password, SdataConfig, SdataConfigBuilder, SdataUri};
pub use error::ConfigError;

// Re-export client types
pub use clients::{HttpClient, HttpMethod, JobClient, SdataClient, SdataError, SdataRequest};
