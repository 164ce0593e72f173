//! Client configuration.

use serde::Deserialize;
use std::time::Duration;

use crate::error::ClientError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of additional attempts after a 5xx response.
pub const DEFAULT_RETRY_COUNT: u32 = 2;

/// Default idle connections kept per host.
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default lifetime of an idle pooled connection.
pub const DEFAULT_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

const SECRET_PATHS: [&str; 2] = [".secrets/lotus.json", "../.secrets/lotus.json"];

/// Configuration for a [`LotusClient`](crate::LotusClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service host, with or without scheme (e.g. `api.uselotus.io`).
    pub host: String,

    /// API key sent in the `X-API-Key` header.
    pub api_key: String,

    /// Per-attempt request timeout (default: 5s).
    pub timeout: Duration,

    /// Additional attempts after a 5xx response (default: 2).
    pub retry_count: u32,

    /// Emit request/response debug events (default: false).
    pub debug: bool,

    /// Idle connections kept per host (default: 10).
    pub pool_max_idle_per_host: usize,

    /// Lifetime of an idle pooled connection (default: 60s).
    pub pool_idle_timeout: Duration,
}

/// Secrets file structure.
#[derive(Debug, Deserialize)]
struct LotusSecrets {
    host: String,
    api_key: String,
}

impl ClientConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            retry_count: DEFAULT_RETRY_COUNT,
            debug: false,
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            pool_idle_timeout: DEFAULT_POOL_IDLE_TIMEOUT,
        }
    }

    /// Load configuration from environment variables and the secrets file.
    ///
    /// `LOTUS_HOST` and `LOTUS_API_KEY` take precedence over
    /// `.secrets/lotus.json`. `LOTUS_TIMEOUT_MS`, `LOTUS_RETRY_COUNT`, and
    /// `LOTUS_DEBUG` override the defaults when set and parseable.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when no host or API key is found.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_sources(|key| std::env::var(key).ok(), &SECRET_PATHS)
    }

    fn from_sources<F>(var: F, secret_paths: &[&str]) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secrets = load_lotus_secrets(secret_paths);

        let host = var("LOTUS_HOST")
            .or_else(|| secrets.as_ref().map(|s| s.host.clone()))
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration("LOTUS_HOST is not set".into()))?;
        let api_key = var("LOTUS_API_KEY")
            .or_else(|| secrets.map(|s| s.api_key))
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration("LOTUS_API_KEY is not set".into()))?;

        let mut config = Self::new(host, api_key);
        if let Some(ms) = var("LOTUS_TIMEOUT_MS").and_then(|s| s.trim().parse().ok()) {
            config = config.with_timeout(Duration::from_millis(ms));
        }
        if let Some(count) = var("LOTUS_RETRY_COUNT").and_then(|s| s.trim().parse().ok()) {
            config = config.with_retry_count(count);
        }
        if let Some(debug) = var("LOTUS_DEBUG") {
            config = config.with_debug(matches!(
                debug.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }
        Ok(config)
    }

    /// Set the request timeout. A zero duration is ignored.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if !timeout.is_zero() {
            self.timeout = timeout;
        }
        self
    }

    /// Set the number of additional attempts after a 5xx response.
    #[must_use]
    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    /// Enable or disable request/response debug events.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the number of idle connections kept per host.
    #[must_use]
    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Set how long an idle pooled connection is kept.
    #[must_use]
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Base URL derived from the host.
    ///
    /// `https://` is prepended when the host carries no `http://` or
    /// `https://` scheme, and trailing slashes are trimmed.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }
}

/// Read `{host, api_key}` from the first path holding a parseable secrets file.
fn load_lotus_secrets(paths: &[&str]) -> Option<LotusSecrets> {
    paths.iter().find_map(|path| {
        let contents = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    })
}
