//! Logging and tracing setup.
//!
//! # Telemetry invariants
//!
//! - **No key material, plaintext, or ciphertext** may appear in any span
//!   attribute or log field. Request types redact themselves in `Debug`.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`); `DEBUG=true`
//!   switches to `debug` with human-readable output.

pub mod init;

pub use init::{init_telemetry, shutdown_telemetry};
