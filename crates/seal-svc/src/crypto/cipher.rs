//! AES-256-GCM sealing and opening of byte payloads.
//!
//! Every [`seal`] draws a fresh 96-bit nonce from [`OsRng`] (the operating
//! system CSPRNG via `getrandom`). GCM nonce reuse under one key breaks both
//! confidentiality and authentication, so the nonce is never taken from a
//! counter, a clock, or caller input.
//!
//! Tag comparison is constant-time inside `aes-gcm`.

use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};

use super::{CryptoError, Key, MIN_SEALED_LEN, NONCE_LEN};

/// Seal `plaintext` under `key`.
///
/// Returns `nonce ‖ ciphertext ‖ tag`, which is
/// `NONCE_LEN + plaintext.len() + TAG_LEN` bytes long.
///
/// # Errors
///
/// Returns [`CryptoError::CipherInit`] if the cipher cannot be built or
/// refuses the input. Neither can happen for a [`Key`] and a request-sized
/// plaintext.
pub fn seal(plaintext: &[u8], key: &Key) -> Result<Vec<u8>, CryptoError> {
    let cipher = build_cipher(key)?;
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| CryptoError::CipherInit)?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Open a message produced by [`seal`].
///
/// # Errors
///
/// - [`CryptoError::MessageTooShort`] if `sealed` is shorter than [`MIN_SEALED_LEN`].
/// - [`CryptoError::AuthenticationFailed`] if the tag does not verify. No
///   plaintext is returned in that case.
pub fn open(sealed: &[u8], key: &Key) -> Result<Vec<u8>, CryptoError> {
    if sealed.len() < MIN_SEALED_LEN {
        return Err(CryptoError::MessageTooShort);
    }

    let cipher = build_cipher(key)?;
    let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailed)
}

fn build_cipher(key: &Key) -> Result<Aes256Gcm, CryptoError> {
    Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| CryptoError::CipherInit)
}
