//! Router-level settings derived from [`Config`].
//!
//! Handlers are stateless: keys and plaintexts are request-scoped and nothing
//! is shared between requests. These settings only shape the router itself.

use std::time::Duration;

use crate::config::Config;

/// Settings applied when building the router.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    /// Prefix under which every route is mounted. Empty mounts at the root.
    pub base_path: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Largest accepted request body in bytes.
    pub max_body_bytes: usize,
}

impl From<&Config> for RouterSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            base_path: cfg.base_path.clone(),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
            max_body_bytes: cfg.max_body_bytes,
        }
    }
}

impl Default for RouterSettings {
    /// Root-mounted router with a 30 s timeout and a 1 MiB body limit.
    fn default() -> Self {
        Self {
            base_path: String::new(),
            request_timeout: Duration::from_secs(30),
            max_body_bytes: 1024 * 1024,
        }
    }
}
