//! Request and response types exchanged over the public JSON API.
//!
//! Field names are part of the wire contract (`plaintext`, `ciphertext`,
//! `userkey`) and must not be renamed.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

// ---------------------------------------------------------------------------
// Encrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /encryptPlaintext`.
#[derive(Clone, Serialize, Deserialize)]
pub struct EncryptRequest {
    /// Text to seal.
    pub plaintext: String,
    /// Standard Base64 encoding of a 32-byte key (44 characters).
    pub userkey: String,
}

/// Successful response body for `POST /encryptPlaintext`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptResponse {
    /// URL-safe Base64 of `nonce ‖ ciphertext ‖ tag`.
    pub ciphertext: String,
}

// ---------------------------------------------------------------------------
// Decrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /decryptCiphertext`.
#[derive(Clone, Serialize, Deserialize)]
pub struct DecryptRequest {
    /// URL-safe Base64 ciphertext as returned by the encrypt endpoint.
    pub ciphertext: String,
    /// Standard Base64 encoding of a 32-byte key (44 characters).
    pub userkey: String,
}

/// Successful response body for `POST /decryptCiphertext`.
#[derive(Clone, Serialize, Deserialize)]
pub struct DecryptResponse {
    /// The recovered plaintext.
    pub plaintext: String,
}

// Request and response bodies carry key material or plaintext; keep them out of logs.
impl std::fmt::Debug for EncryptRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EncryptRequest([REDACTED])")
    }
}

impl std::fmt::Debug for DecryptRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DecryptRequest([REDACTED])")
    }
}

impl std::fmt::Debug for DecryptResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DecryptResponse([REDACTED])")
    }
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"bad_request"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        Self::new(err.code(), err.public_message())
    }
}

// ---------------------------------------------------------------------------
// Liveness check
// ---------------------------------------------------------------------------

/// Response body for `GET /alive`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliveResponse {
    /// Always `"alive"`.
    pub message: String,
}

impl Default for AliveResponse {
    fn default() -> Self {
        Self {
            message: "alive".into(),
        }
    }
}
