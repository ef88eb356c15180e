//! Common error types shared across crates.

use thiserror::Error;

/// Message returned for every authentication failure, whatever the cause.
pub const DECRYPTION_FAILED_MESSAGE: &str = "unable to decrypt ciphertext with the supplied userkey";

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::InvalidKey`] → 400
/// - [`ServiceError::DecryptionFailed`] → 400
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::MethodNotAllowed`] → 405
/// - [`ServiceError::Timeout`] → 408
/// - [`ServiceError::PayloadTooLarge`] → 413
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed — missing field, invalid JSON, or undecodable ciphertext.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The `userkey` field cannot be turned into a 32-byte key.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The ciphertext failed authentication. Carries no detail on purpose.
    #[error("decryption failed")]
    DecryptionFailed,

    /// No route matched the request.
    #[error("not found")]
    NotFound,

    /// The route exists but does not accept the request method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The request body exceeds the configured limit.
    #[error("payload too large")]
    PayloadTooLarge,

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::InvalidKey(_) => 400,
            ServiceError::DecryptionFailed => 400,
            ServiceError::NotFound => 404,
            ServiceError::MethodNotAllowed => 405,
            ServiceError::Timeout => 408,
            ServiceError::PayloadTooLarge => 413,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Short machine-readable code placed in the error response body.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::InvalidKey(_) => "invalid_key",
            ServiceError::DecryptionFailed => "decryption_failed",
            ServiceError::NotFound => "not_found",
            ServiceError::MethodNotAllowed => "method_not_allowed",
            ServiceError::Timeout => "request_timeout",
            ServiceError::PayloadTooLarge => "payload_too_large",
            ServiceError::Internal(_) => "internal_error",
        }
    }

    /// Message that is safe to expose to callers.
    ///
    /// Internal details are replaced with a generic message.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::BadRequest(msg) | ServiceError::InvalidKey(msg) => msg.clone(),
            ServiceError::DecryptionFailed => DECRYPTION_FAILED_MESSAGE.into(),
            ServiceError::NotFound => "the requested resource does not exist".into(),
            ServiceError::MethodNotAllowed => "method not allowed on this route".into(),
            ServiceError::Timeout => "request timed out".into(),
            ServiceError::PayloadTooLarge => "request body is too large".into(),
            ServiceError::Internal(_) => "internal server error".into(),
        }
    }
}
