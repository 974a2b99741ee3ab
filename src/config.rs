//! Environment-backed service settings.
//!
//! Every knob is a `VULNSCAN_*` variable with a working default, so a bare
//! `vulnscan` binary runs against the public OSV API. A `.env` file is
//! honored when present (loaded by main before this module reads the
//! environment).

use anyhow::{bail, Context};
use std::time::Duration;

use crate::shared::Result;

const DEFAULT_PROJECT_NAME: &str = "Vulnerability Scanner";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_SCANNER_ENDPOINT: &str = "https://api.osv.dev/v1/query";
const DEFAULT_LOOKUP_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Name reported by the readiness endpoint.
    pub project_name: String,
    /// Bind address of the HTTP server.
    pub host: String,
    pub port: u16,
    /// Vulnerability service query URL.
    pub scanner_endpoint: String,
    /// Deadline applied to each outbound lookup call.
    pub lookup_timeout: Duration,
    /// Fan-out bound for concurrent lookups within one scan.
    pub max_concurrent_lookups: usize,
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Loads settings from an arbitrary key lookup. Exists so tests can
    /// inject values without touching the process environment.
    pub fn from_source<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match get("VULNSCAN_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("VULNSCAN_PORT is not a valid port: '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        let lookup_timeout_seconds = match get("VULNSCAN_LOOKUP_TIMEOUT_SECONDS") {
            Some(raw) => raw.parse::<u64>().with_context(|| {
                format!(
                    "VULNSCAN_LOOKUP_TIMEOUT_SECONDS is not a valid number of seconds: '{}'",
                    raw
                )
            })?,
            None => DEFAULT_LOOKUP_TIMEOUT_SECONDS,
        };

        let max_concurrent_lookups = match get("VULNSCAN_MAX_CONCURRENT_LOOKUPS") {
            Some(raw) => raw.parse::<usize>().with_context(|| {
                format!(
                    "VULNSCAN_MAX_CONCURRENT_LOOKUPS is not a valid count: '{}'",
                    raw
                )
            })?,
            None => DEFAULT_MAX_CONCURRENT_LOOKUPS,
        };

        let settings = Self {
            project_name: get("VULNSCAN_PROJECT_NAME")
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
            host: get("VULNSCAN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            scanner_endpoint: get("VULNSCAN_SCANNER_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_SCANNER_ENDPOINT.to_string()),
            lookup_timeout: Duration::from_secs(lookup_timeout_seconds),
            max_concurrent_lookups,
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.scanner_endpoint.is_empty() {
            bail!("VULNSCAN_SCANNER_ENDPOINT must not be empty");
        }
        if self.lookup_timeout.is_zero() {
            bail!("VULNSCAN_LOOKUP_TIMEOUT_SECONDS must be at least 1");
        }
        if self.max_concurrent_lookups == 0 {
            bail!("VULNSCAN_MAX_CONCURRENT_LOOKUPS must be at least 1");
        }
        Ok(())
    }
}
