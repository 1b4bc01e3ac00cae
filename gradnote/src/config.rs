//! HTTP client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Empty base URL: requests go to the page's own origin.
pub const DEFAULT_BASE_URL: &str = "";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const BASE_URL_VAR: &str = "GRADNOTE_API_URL";
pub const TIMEOUT_VAR: &str = "GRADNOTE_TIMEOUT_MS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host prefixed to every API path, without a trailing slash.
    pub base_url: String,
    /// Upper bound for one request, connection included.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self { base_url: normalize_base_url(base_url), timeout }
    }

    /// Build config from a key lookup (process env, compile-time env, ...).
    ///
    /// Optional:
    /// - `GRADNOTE_API_URL`: default same origin
    /// - `GRADNOTE_TIMEOUT_MS`: default 10000; unparsable or zero values fall
    ///   back to the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let timeout_ms = lookup(TIMEOUT_VAR)
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        Self::new(&base_url, Duration::from_millis(timeout_ms))
    }

    /// Join the base URL and an absolute API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
