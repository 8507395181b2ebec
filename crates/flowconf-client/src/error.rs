//! Client error types for the flowconf console API
//!
//! Failures with no response at all are split three ways so the console
//! can show the right diagnostic: a client-side timeout, a connection
//! that never reached the backend, and everything else (which keeps the
//! original transport error, HTTP status included).

use reqwest::StatusCode;

/// Fallback used when an error envelope carries no message
pub const GENERIC_FAILURE: &str = "request failed";

/// Diagnostic for a client-side timeout
pub const TIMEOUT_HINT: &str = "request timed out; check that the backend service is running";

/// Diagnostic for a connection that never produced a response
pub const UNREACHABLE_HINT: &str = "cannot connect to the backend service; make sure it is running";

/// Error type for console client operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The envelope came back with a non-zero code
    #[error("{message}")]
    Api { code: i32, message: String },

    #[error("request timed out; check that the backend service is running")]
    Timeout,

    #[error("cannot connect to the backend service; make sure it is running")]
    Unreachable,

    /// Any other transport failure, original error preserved
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Build an application error from an envelope, substituting the
    /// generic fallback for a missing message.
    pub fn from_envelope(code: i32, message: String) -> Self {
        let message = if message.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        };
        ClientError::Api { code, message }
    }

    /// HTTP status of a passthrough transport error, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Classify a transport-level failure: timeout, unreachable, or
    /// passthrough.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Unreachable
        } else {
            ClientError::Http(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
