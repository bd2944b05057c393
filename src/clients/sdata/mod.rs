//! Resource client for SData.
//!
//! This module provides [`SdataClient`], built on top of the
//! [`HttpClient`](crate::clients::HttpClient), offering the resource
//! operations of the SData dynamic area:
//!
//! - [`SdataClient::read`]: Read a feed, optionally filtered by a `where` clause
//! - [`SdataClient::create`]: Create a resource
//! - [`SdataClient::update`]: Update a resource identified by its `$key`
//! - [`SdataClient::delete`]: Delete a resource
//! - [`SdataClient::call_business_rule`]: Invoke a business rule on a record
//! - [`SdataClient::execute_request`]: Send an arbitrary request fragment
//!
//! # Example
//!
//! ```rust,ignore
//! use sdata::{SdataClient, SdataConfig, SdataUri};
//!
//! let config = SdataConfig::builder()
//!     .sdata_uri(SdataUri::new("https://crm.example.com/sdata")?)
//!     .build()?;
//!
//! let mut client = SdataClient::new(&config)?;
//! client.set_authentication_parameters("admin", "secret");
//!
//! let result = client
//!     .call_business_rule("Opportunity", "CloseWon", "OQF8AA0000AB", None)
//!     .await?;
//! ```

mod client;

pub use client::SdataClient;
