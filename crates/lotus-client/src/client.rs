//! Lotus HTTP client implementation.

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError, Result};
use crate::query::Query;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

const RETRY_BASE_DELAY: Duration = Duration::from_millis(100);
const RETRY_MAX_DELAY: Duration = Duration::from_secs(2);

/// Lotus API client.
///
/// Immutable once built. Clones share the underlying connection pool, so a
/// single client can serve any number of concurrent tasks.
#[derive(Debug, Clone)]
pub struct LotusClient {
    http: Client,
    base_url: Url,
    api_key: HeaderValue,
    retry_count: u32,
    debug: bool,
}

impl LotusClient {
    /// Create a client with default settings.
    ///
    /// # Arguments
    ///
    /// * `host` - Service host (e.g., `"api.uselotus.io"`); `https://` is assumed when no scheme is given
    /// * `api_key` - Organization API key
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the host or key is invalid.
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(host, api_key))
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the host or key is invalid or
    /// the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.host.trim().is_empty() {
            return Err(ClientError::Configuration("host is empty".into()));
        }
        if config.api_key.is_empty() {
            return Err(ClientError::Configuration("API key is empty".into()));
        }

        let base_url = Url::parse(&config.base_url())
            .map_err(|e| ClientError::Configuration(format!("invalid host {:?}: {e}", config.host)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Configuration(format!(
                "invalid host {:?}: not a base URL",
                config.host
            )));
        }

        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| ClientError::Configuration("API key contains invalid characters".into()))?;
        api_key.set_sensitive(true);

        let http = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .connection_verbose(config.debug)
            .user_agent(concat!("lotus-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            api_key,
            retry_count: config.retry_count,
            debug: config.debug,
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Build the URL for a path given as segments.
    ///
    /// Segments are percent-encoded individually. A trailing empty segment
    /// produces a trailing slash.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::Configuration("host is not a base URL".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a GET request and decode the response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: Option<&Query>,
    ) -> Result<T> {
        let url = self.url(path)?;
        self.execute(Method::GET, url, query, None).await
    }

    /// Send a POST request with a JSON body and decode the response.
    pub(crate) async fn post<T, B>(&self, path: &[&str], query: Option<&Query>, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let body = serde_json::to_vec(body)?;
        self.execute(Method::POST, url, query, Some(body)).await
    }

    /// Send a request, retrying on 5xx responses.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        query: Option<&Query>,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let pairs = query.map(Query::pairs).unwrap_or_default();
        let mut attempt: u32 = 0;

        loop {
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .header(API_KEY_HEADER, self.api_key.clone())
                .header(ACCEPT, "application/json");
            if !pairs.is_empty() {
                request = request.query(&pairs);
            }
            if let Some(body) = &body {
                request = request
                    .header(CONTENT_TYPE, "application/json")
                    .body(body.clone());
            }

            if self.debug {
                tracing::debug!(
                    method = %method,
                    url = %url,
                    query = ?pairs,
                    attempt = attempt + 1,
                    body = %body.as_deref().map(String::from_utf8_lossy).unwrap_or_default(),
                    "Lotus request"
                );
            }

            let response = request.send().await?;
            let status = response.status();

            if status.is_server_error() && attempt < self.retry_count {
                let delay = retry_delay(attempt);
                if self.debug {
                    tracing::debug!(
                        status = status.as_u16(),
                        attempt = attempt + 1,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        "Lotus server error, retrying"
                    );
                }
                drop(response);
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            return self.handle_response(response).await;
        }
    }

    /// Decode a success body or classify a failure.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if self.debug {
            tracing::debug!(
                status = status.as_u16(),
                body = %String::from_utf8_lossy(&body),
                "Lotus response"
            );
        }

        if status.is_success() {
            return serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
                status: status.as_u16(),
                source,
            });
        }

        Err(classify(status.as_u16(), &body))
    }
}

/// Classify a non-2xx response.
fn classify(status: u16, body: &[u8]) -> ClientError {
    match ApiError::from_body(body) {
        Some(error) => ClientError::Api { status, error },
        None => ClientError::Http {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

/// Backoff before retry number `attempt + 1`: 100ms doubling, capped at 2s.
fn retry_delay(attempt: u32) -> Duration {
    RETRY_BASE_DELAY
        .saturating_mul(1_u32 << attempt.min(16))
        .min(RETRY_MAX_DELAY)
}
