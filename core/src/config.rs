//! Client configuration.
//!
//! The base URL is injected into `AdminClient::new` rather than read from a
//! global. `ClientConfig` gathers it together with the transport timeout and
//! can be deserialized from any serde source or read from the environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/admin-api";

pub const BASE_URL_ENV: &str = "ADMIN_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "ADMIN_API_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Admin API root, e.g. `https://shop.example.com/admin-api`.
    pub base_url: String,
    /// Global request timeout in milliseconds, applied by `UreqTransport`.
    /// `None` waits forever.
    pub timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sub-millisecond remainders round up, so a non-zero timeout never
    /// becomes zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Reads `ADMIN_API_BASE_URL` and `ADMIN_API_TIMEOUT_MS`, falling back
    /// to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: TIMEOUT_ENV,
                value: raw.clone(),
            })?;
            config.timeout_ms = Some(millis);
        }
        Ok(config)
    }
}
