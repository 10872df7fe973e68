//! Error types for the Smartweb client.
//!
//! All errors implement the standard [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Remote faults** ([`SmartwebError::HttpError`], [`SmartwebError::RemoteFault`],
//!   [`SmartwebError::TransportError`]): the call did not complete on the remote side. These are
//!   never retried or translated by the client.
//! - **Decoding errors** ([`SmartwebError::MalformedResponse`]): the reply could not be read as a
//!   SOAP envelope, or a record field carried a value of the wrong shape.
//! - **Session errors** ([`SmartwebError::ConnectionRejected`]): `Solution_Connect` refused the
//!   credentials.
//! - **Local errors** ([`SmartwebError::ConfigError`], [`SmartwebError::InvalidInput`]).
//!
//! "Not found" is not an error: single-record lookups return `Ok(None)`.
//!
//! # Examples
//!
//! ```
//! use smartweb_client::error::{Result, SmartwebError};
//!
//! fn require_id(id: Option<i64>) -> Result<i64> {
//!     id.ok_or_else(|| SmartwebError::InvalidInput("record has no Id".to_owned()))
//! }
//!
//! assert!(require_id(None).is_err());
//! ```

use thiserror::Error;

/// Result type alias for client operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, SmartwebError>;

/// Errors that can occur while talking to the Smartweb API.
///
/// # Error Recovery
///
/// - **Network errors** ([`HttpError`](Self::HttpError)): the client does not retry; callers that
///   want retries wrap the call themselves.
/// - **Remote faults** ([`RemoteFault`](Self::RemoteFault)): inspect `code` and `message`; the
///   remote service rejected the call as sent.
/// - **Configuration errors** ([`ConfigError`](Self::ConfigError)): fix the configuration.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum SmartwebError {
    /// HTTP request failed.
    ///
    /// Wraps [`reqwest::Error`]: timeouts, refused connections, DNS and TLS failures.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The remote service answered with a SOAP fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartweb_client::error::SmartwebError;
    ///
    /// let err = SmartwebError::RemoteFault {
    ///     code: "SOAP-ENV:Server".to_owned(),
    ///     message: "Product not found".to_owned(),
    /// };
    /// assert_eq!(err.to_string(), "remote fault SOAP-ENV:Server: Product not found");
    /// ```
    #[error("remote fault {code}: {message}")]
    RemoteFault {
        /// Fault code reported by the service (`faultcode`).
        code: String,
        /// Human readable fault text (`faultstring`).
        message: String,
    },

    /// Transport-level failure that is not a SOAP fault.
    ///
    /// Raised for non-success HTTP statuses without a fault body and for endpoint URLs the
    /// transport refuses to call.
    #[error("transport error: {0}")]
    TransportError(String),

    /// The reply could not be decoded.
    ///
    /// Raised when the body is not a SOAP envelope, or when a record field has a value that
    /// cannot be read as the declared type.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// `Solution_Connect` answered `false`.
    #[error("connection rejected: {0}")]
    ConnectionRejected(String),

    /// Configuration is invalid.
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Caller input that cannot be sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SmartwebError {
    /// Returns true if the remote service was reached and rejected the call.
    #[must_use]
    pub fn is_remote_fault(&self) -> bool {
        matches!(self, Self::RemoteFault { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_fault_display() {
        let error = SmartwebError::RemoteFault {
            code: "SOAP-ENV:Client".to_owned(),
            message: "Unknown operation".to_owned(),
        };
        assert_eq!(error.to_string(), "remote fault SOAP-ENV:Client: Unknown operation");
        assert!(error.is_remote_fault());
    }

    #[test]
    fn test_malformed_response_display() {
        let error = SmartwebError::MalformedResponse("missing Body".into());
        assert_eq!(error.to_string(), "malformed response: missing Body");
        assert!(!error.is_remote_fault());
    }

    #[test]
    fn test_config_error_display() {
        let error = SmartwebError::ConfigError("endpoint must use HTTPS".to_owned());
        assert!(error.to_string().contains("invalid configuration"));
    }

    #[test]
    fn test_connection_rejected_display() {
        let error = SmartwebError::ConnectionRejected("Solution_Connect returned false".to_owned());
        assert_eq!(error.to_string(), "connection rejected: Solution_Connect returned false");
    }
}
