//! Transport encoding of sealed messages.
//!
//! Sealed bytes travel as RFC 4648 URL-safe Base64 with `=` padding, so they
//! can sit in JSON bodies and URLs without escaping. Decoding is strict.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};

use super::CryptoError;

/// Encode sealed bytes for transport.
pub fn encode_sealed(sealed: &[u8]) -> String {
    URL_SAFE.encode(sealed)
}

/// Decode transport text back into sealed bytes.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidCiphertextEncoding`] on any character outside
/// the URL-safe alphabet or on missing or misplaced padding.
pub fn decode_sealed(text: &str) -> Result<Vec<u8>, CryptoError> {
    URL_SAFE
        .decode(text)
        .map_err(|_| CryptoError::InvalidCiphertextEncoding)
}
