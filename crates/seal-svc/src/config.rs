//! Configuration loading and validation for the seal service.
//!
//! Values come from environment variables, optionally layered on top of a YAML
//! file named by `CONFIG`. Environment variables win. The process exits with a
//! clear error message if any value is invalid.

use anyhow::{Context, Result};
use config::{builder::DefaultState, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_FILE_VAR: &str = "CONFIG";

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Prefix under which every route is mounted, e.g. `"/crypto"`. Empty
    /// mounts at the root.
    #[serde(default)]
    pub base_path: String,

    /// Human-readable log output at `debug` level.
    #[serde(default)]
    pub debug: bool,

    /// Tracing log level (e.g. `"info"`, `"debug"`). Ignored when `debug` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// OTLP endpoint for span export. Unset disables export.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Largest accepted request body in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_port() -> u16 {
    8080
}
fn default_log_level() -> String {
    "info".into()
}
fn default_request_timeout() -> u64 {
    30
}
fn default_max_body_bytes() -> usize {
    1024 * 1024
}

impl Config {
    /// Load and validate configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML file cannot be read, if a value cannot be
    /// parsed, or if validation fails.
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = std::env::var(CONFIG_FILE_VAR)
            .ok()
            .filter(|p| !p.trim().is_empty())
        {
            builder = builder.add_source(File::new(&path, FileFormat::Yaml).required(true));
        }
        Self::from_builder(builder.add_source(Environment::default()))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let cfg = builder
            .build()
            .context("failed to build configuration")?;

        let mut c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        if c
            .otel_exporter_otlp_endpoint
            .as_deref()
            .is_some_and(|e| e.trim().is_empty())
        {
            c.otel_exporter_otlp_endpoint = None;
        }

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be > 0");
        }
        if !self.base_path.is_empty()
            && (!self.base_path.starts_with('/') || self.base_path.ends_with('/'))
        {
            anyhow::bail!("BASE_PATH must start with '/' and must not end with '/'");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("LOG_LEVEL must not be empty");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be > 0");
        }
        if self.max_body_bytes == 0 {
            anyhow::bail!("MAX_BODY_BYTES must be > 0");
        }
        Ok(())
    }

    /// Log level actually applied, taking `debug` into account.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }
}
