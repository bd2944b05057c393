//! SData resource addressing and request shapes.
//!
//! This module renders high-level operations into [`SdataRequest`](crate::clients::SdataRequest)
//! descriptors. It performs no I/O; the clients in [`crate::clients`] send
//! the descriptors.
//!
//! # Overview
//!
//! - [`path`]: URL fragments and query encoding
//! - [`requests`]: Resource operations (read, create, update, delete, business rules)
//! - [`job`]: Scheduling service triggers and execution polling

pub mod job;
pub mod path;
pub mod requests;

pub use job::{JobParameter, JobReference, TriggerPayload, SCHEDULING_PATH};
pub use path::{
    collection_path, encode_query_value, instance_path, read_fragment, service_path, FORMAT_JSON,
};
pub use requests::{business_rule_result, KEY_FIELD};
