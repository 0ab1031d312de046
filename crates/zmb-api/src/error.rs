//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the storefront backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connect, timeout, TLS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {resource}")]
    NotFound {
        /// Request path that produced the 404.
        resource: String,
    },

    /// Missing or rejected session (HTTP 401/403).
    #[error("unauthorized ({status}): sign in again")]
    Unauthorized {
        /// 401 or 403.
        status: u16,
    },

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// A file selected for upload was rejected before sending.
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Whether the UI should render a "not found" state instead of an error notice.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
