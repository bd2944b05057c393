//! Job client for the SData scheduling service.
//!
//! [`JobClient`] triggers asynchronous jobs and polls their execution
//! status. It sends its requests through an [`SdataClient`](crate::SdataClient).

mod client;

pub use client::JobClient;
