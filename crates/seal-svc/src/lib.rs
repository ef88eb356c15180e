//! `seal-svc` — text encryption service built on AES-256-GCM.
//!
//! The [`crypto`] module is the authenticated encryption core; [`server`]
//! exposes it over HTTP.

pub mod config;
pub mod crypto;
pub mod server;
pub mod telemetry;
