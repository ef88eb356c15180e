//! Text-in, text-out composition of the key codec, cipher, and transport codec.

use super::{cipher, decode_key, decode_sealed, encode_sealed, CryptoError};

/// Seal `plaintext` under the key encoded in `key_text` and return transport text.
///
/// # Errors
///
/// Key errors from [`decode_key`]; [`CryptoError::CipherInit`] from [`cipher::seal`].
pub fn seal_text(plaintext: &str, key_text: &str) -> Result<String, CryptoError> {
    let key = decode_key(key_text)?;
    let sealed = cipher::seal(plaintext.as_bytes(), &key)?;
    Ok(encode_sealed(&sealed))
}

/// Open transport text produced by [`seal_text`].
///
/// The key is validated before the ciphertext is looked at.
///
/// # Errors
///
/// Key errors from [`decode_key`], [`CryptoError::InvalidCiphertextEncoding`],
/// errors from [`cipher::open`], and [`CryptoError::InvalidPlaintextEncoding`]
/// if an authentic message does not hold UTF-8 text.
pub fn open_text(ciphertext: &str, key_text: &str) -> Result<String, CryptoError> {
    let key = decode_key(key_text)?;
    let sealed = decode_sealed(ciphertext)?;
    let plaintext = cipher::open(&sealed, &key)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidPlaintextEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{encode_key, Key, KEY_LEN};

    const ZERO_KEY_TEXT: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";
    const OTHER_KEY_TEXT: &str = "+YbX43O5PU/o1bBlRoFh1pZTbluSzABjuxriVo3e+Bk=";

    #[test]
    fn text_round_trip() {
        let sealed = seal_text("Hello, World!", ZERO_KEY_TEXT).unwrap();
        assert_eq!(decode_sealed(&sealed).unwrap().len(), 41);
        assert_eq!(open_text(&sealed, ZERO_KEY_TEXT).unwrap(), "Hello, World!");
    }

    #[test]
    fn unicode_and_empty_round_trip() {
        for plaintext in ["", "héllo wörld ✓", "line one\nline two"] {
            let sealed = seal_text(plaintext, OTHER_KEY_TEXT).unwrap();
            assert_eq!(open_text(&sealed, OTHER_KEY_TEXT).unwrap(), plaintext);
        }
    }

    #[test]
    fn wrong_key_text_fails_auth() {
        let sealed = seal_text("secret", ZERO_KEY_TEXT).unwrap();
        assert_eq!(
            open_text(&sealed, OTHER_KEY_TEXT).unwrap_err(),
            CryptoError::AuthenticationFailed
        );
    }

    #[test]
    fn key_checked_before_ciphertext() {
        assert_eq!(
            open_text("not base64 at all!", "short").unwrap_err(),
            CryptoError::InvalidKeyLength
        );
    }

    #[test]
    fn bad_ciphertext_encoding_short_circuits() {
        assert_eq!(
            open_text("not base64 at all!", ZERO_KEY_TEXT).unwrap_err(),
            CryptoError::InvalidCiphertextEncoding
        );
    }

    #[test]
    fn short_ciphertext_is_reported() {
        let text = encode_sealed(&[1u8; 10]);
        assert_eq!(
            open_text(&text, ZERO_KEY_TEXT).unwrap_err(),
            CryptoError::MessageTooShort
        );
    }

    #[test]
    fn authentic_non_utf8_plaintext_is_reported() {
        let key = Key::from_bytes([9u8; KEY_LEN]);
        let sealed = cipher::seal(&[0xFF, 0xFE], &key).unwrap();
        assert_eq!(
            open_text(&encode_sealed(&sealed), &encode_key(&key)).unwrap_err(),
            CryptoError::InvalidPlaintextEncoding
        );
    }
}
