//! Request-time error types for the SData client library.
//!
//! Every failure of a dispatched request is normalized into a single
//! [`SdataError`] channel:
//!
//! - [`SdataError::Application`]: The server answered with a structured SData
//!   error body (a JSON array whose first element carries a `message`)
//! - [`SdataError::Transport`]: Any other non-2xx response
//! - [`SdataError::Network`]: No response was received at all
//! - [`SdataError::InvalidRequest`]: The request could not be built
//!
//! # Example
//!
//! ```rust,ignore
//! use sdata::clients::SdataError;
//!
//! match client.read("Account", Some("Name eq 'Abbott'"), None).await {
//!     Ok(feed) => println!("{feed}"),
//!     Err(SdataError::Application { message, .. }) => println!("SData rejected the request: {message}"),
//!     Err(e) => println!("Request failed: {}", e.message()),
//! }
//! ```

use thiserror::Error;

/// Unified error type for SData requests.
#[derive(Debug, Error)]
pub enum SdataError {
    /// The server returned a structured SData error.
    ///
    /// Displays exactly the server-provided message.
    #[error("{message}")]
    Application {
        /// The HTTP status code of the response.
        status: u16,
        /// The `message` of the first diagnosis in the error body.
        message: String,
    },

    /// The server returned a non-2xx response without a structured error.
    ///
    /// Displays the status text of the response.
    #[error("{status_text}")]
    Transport {
        /// The HTTP status code of the response.
        status: u16,
        /// The status text (reason phrase) of the response.
        status_text: String,
        /// The raw response body.
        body: String,
    },

    /// The request could not be completed (connection, TLS, timeout).
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The request could not be built.
    #[error("Invalid SData request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected.
        reason: String,
    },
}

impl SdataError {
    /// Builds a [`SdataError::Transport`].
    ///
    /// The status text is the reason phrase the server sent, falling back to
    /// the canonical reason phrase of `status`, then to `HTTP <status>`.
    #[must_use]
    pub fn transport(status: u16, reason: Option<&str>, body: impl Into<String>) -> Self {
        let status_text = reason
            .filter(|reason| !reason.trim().is_empty())
            .or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
            })
            .map_or_else(|| format!("HTTP {status}"), str::to_string);

        Self::Transport {
            status,
            status_text,
            body: body.into(),
        }
    }

    /// Returns the message a caller should present to the end user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Application { status, .. } | Self::Transport { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest { .. } => None,
        }
    }
}
