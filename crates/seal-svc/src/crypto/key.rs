//! Caller key handling: the [`Key`] type and its text codec.
//!
//! Keys arrive as standard Base64 text. The length is checked before any
//! decoding happens and again on the decoded bytes; nothing is ever padded or
//! truncated to fit.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{CryptoError, KEY_LEN};

/// Character count of a standard-Base64 encoded [`KEY_LEN`]-byte key.
pub const ENCODED_KEY_LEN: usize = 44;

/// Exactly [`KEY_LEN`] bytes of AES-256 key material.
///
/// The memory is zeroized on drop, and the `Debug` output never shows the
/// bytes.
pub struct Key(Box<[u8; KEY_LEN]>);

impl Key {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(Box::new(bytes))
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != KEY_LEN {
            return Err(CryptoError::InvalidKeyLength);
        }
        let mut buf = Box::new([0u8; KEY_LEN]);
        buf.copy_from_slice(bytes);
        Ok(Self(buf))
    }
}

impl Zeroize for Key {
    fn zeroize(&mut self) {
        (*self.0).zeroize();
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Key {}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key([REDACTED])")
    }
}

/// Decode caller-supplied key text into a [`Key`].
///
/// # Errors
///
/// - [`CryptoError::InvalidKeyLength`] if `text` is not [`ENCODED_KEY_LEN`]
///   characters long, or decodes to anything but [`KEY_LEN`] bytes.
/// - [`CryptoError::InvalidKeyEncoding`] if `text` is not canonical standard Base64.
pub fn decode_key(text: &str) -> Result<Key, CryptoError> {
    if text.chars().count() != ENCODED_KEY_LEN {
        return Err(CryptoError::InvalidKeyLength);
    }

    let decoded = Zeroizing::new(
        STANDARD
            .decode(text)
            .map_err(|_| CryptoError::InvalidKeyEncoding)?,
    );
    Key::try_from(decoded.as_slice())
}

/// Encode a [`Key`] as standard Base64 text, the inverse of [`decode_key`].
pub fn encode_key(key: &Key) -> String {
    STANDARD.encode(key.as_bytes())
}
