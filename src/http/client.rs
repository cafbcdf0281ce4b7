//! HTTP client with retry and rate limiting
//!
//! The production `Transport`: GETs a page URL, retries transient failures
//! with backoff, honors `Retry-After`, and parses the body as JSON.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::types::{BackoffType, JsonValue, StringMap};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Seconds to wait after a 429 that carries no usable `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

// ============================================================================
// Retry Policy
// ============================================================================

/// How transient failures are retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Growth of the delay between retries
    pub backoff: BackoffType,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Upper bound on any delay
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: BackoffType::Exponential,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Fail on the first error
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `attempt + 1`
    pub fn delay(&self, attempt: u32) -> Duration {
        let delay = match self.backoff {
            BackoffType::Constant => self.initial_backoff,
            BackoffType::Linear => self.initial_backoff.saturating_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => self
                .initial_backoff
                .saturating_mul(2u32.saturating_pow(attempt)),
        };
        delay.min(self.max_backoff)
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Retry behavior
    pub retry: RetryPolicy,
    /// Client-side rate limit
    pub rate_limit: Option<RateLimiterConfig>,
    /// Headers sent with every request
    pub default_headers: StringMap,
    /// User-Agent header
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: StringMap::new(),
            user_agent: default_user_agent(),
        }
    }
}

/// User agent sent when none is configured
pub fn default_user_agent() -> String {
    format!("rest-queryset/{}", env!("CARGO_PKG_VERSION"))
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the retry policy
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.config.retry = policy;
        self
    }

    /// Set the rate limit
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client with retry and rate limiting
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// The client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// True if requests are rate limited
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// GET a URL, retrying transient failures
    ///
    /// Returns the last error once the retry policy is used up.
    pub async fn fetch(&self, url: &str) -> Result<Response> {
        let policy = self.config.retry;
        let mut attempt = 0;

        loop {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            let error = match self.send(url).await {
                Ok(response) if response.status().is_success() => {
                    debug!("GET {} -> {}", url, response.status());
                    return Ok(response);
                }
                Ok(response) => status_error(response).await,
                Err(e) if e.is_timeout() => Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                },
                Err(e) => Error::Http(e),
            };

            let delay = match &error {
                Error::RateLimited {
                    retry_after_seconds,
                } => Some(Duration::from_secs(*retry_after_seconds)),
                e if e.is_retryable() => Some(policy.delay(attempt)),
                _ => None,
            };

            match delay {
                Some(delay) if attempt < policy.max_retries => {
                    warn!(
                        "GET {} failed ({}), attempt {}/{}, retrying in {:?}",
                        url,
                        error,
                        attempt + 1,
                        policy.max_retries + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                _ => return Err(error),
            }
        }
    }

    /// GET a URL and parse the body as JSON
    pub async fn get_json(&self, url: &str) -> Result<JsonValue> {
        self.fetch(url)
            .await?
            .json::<JsonValue>()
            .await
            .map_err(|e| Error::decode(format!("Failed to parse JSON body from {url}: {e}")))
    }

    async fn send(&self, url: &str) -> reqwest::Result<Response> {
        self.config
            .default_headers
            .iter()
            .fold(self.client.get(url), |req, (key, value)| {
                req.header(key.as_str(), value.as_str())
            })
            .send()
            .await
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, url: &str) -> Result<JsonValue> {
        self.get_json(url).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Error for a non-success response
async fn status_error(response: Response) -> Error {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Error::RateLimited {
            retry_after_seconds: retry_after(&response),
        };
    }
    let body = response.text().await.unwrap_or_default();
    Error::http_status(status.as_u16(), body)
}

/// Seconds from a `Retry-After` header
fn retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
