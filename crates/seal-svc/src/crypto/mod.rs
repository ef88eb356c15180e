//! AES-256-GCM authenticated encryption core.
//!
//! This module is free of HTTP dependencies and never logs. It provides two
//! pure operations, [`seal`] and [`open`], plus the key and transport codecs
//! that surround them.
//!
//! # Sealed message format
//!
//! ```text
//! nonce (12 bytes) ‖ ciphertext (len(plaintext) bytes) ‖ tag (16 bytes)
//! ```
//!
//! On the wire the sealed bytes are URL-safe Base64 with padding. Keys are
//! standard Base64 of exactly 32 bytes.

pub mod cipher;
pub mod encoding;
pub mod error;
pub mod key;
pub mod text;

pub use cipher::{open, seal};
pub use encoding::{decode_sealed, encode_sealed};
pub use error::CryptoError;
pub use key::{decode_key, encode_key, Key};
pub use text::{open_text, seal_text};

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of an AES-GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// Smallest possible sealed message: a nonce and a tag around empty plaintext.
pub const MIN_SEALED_LEN: usize = NONCE_LEN + TAG_LEN;
