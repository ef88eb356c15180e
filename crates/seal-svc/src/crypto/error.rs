//! Error taxonomy of the crypto core.

use thiserror::Error;

use super::{KEY_LEN, MIN_SEALED_LEN};

/// Errors produced by key decoding, sealing, and opening.
///
/// Display strings never contain key material, plaintext, or ciphertext.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// The key text does not have the length of an encoded 32-byte key, or it
    /// decodes to a length other than [`KEY_LEN`].
    #[error("invalid key length: expected {KEY_LEN} bytes")]
    InvalidKeyLength,

    /// The key text is not valid standard Base64.
    #[error("invalid key encoding")]
    InvalidKeyEncoding,

    /// The sealed input cannot hold a nonce and a tag.
    #[error("sealed message too short: need at least {MIN_SEALED_LEN} bytes")]
    MessageTooShort,

    /// Tag verification failed. Wrong key, tampering, truncation, and
    /// extension all surface as this one variant.
    #[error("message authentication failed")]
    AuthenticationFailed,

    /// The AEAD cipher could not be constructed or refused to seal.
    #[error("cipher initialisation failed")]
    CipherInit,

    /// The transport text is not valid URL-safe Base64.
    #[error("invalid ciphertext encoding")]
    InvalidCiphertextEncoding,

    /// The message authenticated but its plaintext is not UTF-8.
    #[error("plaintext is not valid UTF-8")]
    InvalidPlaintextEncoding,
}
