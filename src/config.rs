//! Collection definitions loaded from YAML
//!
//! A definition names one remote collection, how it pages, and how the HTTP
//! client talking to it behaves.
//!
//! ```yaml
//! name: users
//! endpoint: https://api.example.com/users/
//! pagination:
//!   type: limit_offset
//!   page_size: 50
//! http:
//!   timeout_secs: 10
//!   headers:
//!     Authorization: Token abc123
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::{default_user_agent, HttpClientConfig, RateLimiterConfig, RetryPolicy};
use crate::pagination::{PageStyle, PaginationConfig};
use crate::sequence::CollectionDescriptor;
use crate::types::{BackoffType, StringMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Collection
// ============================================================================

/// A remote collection definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Collection name, used in logs
    pub name: String,

    /// Collection URL
    pub endpoint: String,

    /// How the collection pages
    #[serde(default)]
    pub pagination: PaginationDef,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpSettings,
}

impl CollectionConfig {
    /// Build the descriptor a sequence reads from
    pub fn descriptor(&self) -> Result<CollectionDescriptor> {
        match self.pagination.to_config() {
            None => CollectionDescriptor::unpaginated(&self.endpoint),
            Some(config) => CollectionDescriptor::paginated(&self.endpoint, config),
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Pagination section of a definition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaginationDef {
    /// Bare array, one request
    #[default]
    None,

    /// `?offset=N&limit=M`
    LimitOffset {
        #[serde(default = "default_page_size")]
        page_size: u32,
        #[serde(default = "default_offset_param")]
        offset_param: String,
        #[serde(default = "default_limit_param")]
        limit_param: String,
        #[serde(default = "default_results_field")]
        results_field: String,
        #[serde(default = "default_count_field")]
        count_field: String,
    },

    /// `?page=N&page_size=M`
    PageNumber {
        #[serde(default = "default_page_size")]
        page_size: u32,
        #[serde(default = "default_page_param")]
        page_param: String,
        /// Omit to leave the page size to the server
        #[serde(default = "default_page_size_param")]
        page_size_param: Option<String>,
        #[serde(default = "default_first_page")]
        first_page: u32,
        #[serde(default = "default_results_field")]
        results_field: String,
        #[serde(default = "default_count_field")]
        count_field: String,
    },
}

fn default_page_size() -> u32 {
    20
}

fn default_offset_param() -> String {
    "offset".to_string()
}

fn default_limit_param() -> String {
    "limit".to_string()
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_page_size_param() -> Option<String> {
    Some("page_size".to_string())
}

fn default_first_page() -> u32 {
    1
}

fn default_results_field() -> String {
    "results".to_string()
}

fn default_count_field() -> String {
    "count".to_string()
}

impl PaginationDef {
    /// Pagination config, or `None` for an unpaginated collection
    pub fn to_config(&self) -> Option<PaginationConfig> {
        match self {
            Self::None => None,
            Self::LimitOffset {
                page_size,
                offset_param,
                limit_param,
                results_field,
                count_field,
            } => Some(
                PaginationConfig::limit_offset(*page_size)
                    .with_style(PageStyle::limit_offset(offset_param, limit_param))
                    .with_results_field(results_field)
                    .with_count_field(count_field),
            ),
            Self::PageNumber {
                page_size,
                page_param,
                page_size_param,
                first_page,
                results_field,
                count_field,
            } => {
                let style = match page_size_param {
                    Some(size_param) => {
                        PageStyle::page_number_with_size(page_param, size_param, *first_page)
                    }
                    None => PageStyle::page_number(page_param, *first_page),
                };
                Some(
                    PaginationConfig::page_number(*page_size)
                        .with_style(style)
                        .with_results_field(results_field)
                        .with_count_field(count_field),
                )
            }
        }
    }

    fn page_size(&self) -> Option<u32> {
        match self {
            Self::None => None,
            Self::LimitOffset { page_size, .. } | Self::PageNumber { page_size, .. } => {
                Some(*page_size)
            }
        }
    }
}

// ============================================================================
// HTTP
// ============================================================================

/// HTTP section of a definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff between retries
    #[serde(default)]
    pub backoff: BackoffType,

    /// First backoff delay in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Backoff cap in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Client-side rate limit; omit for no limit
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: StringMap,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffType::default(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            rate_limit: None,
            headers: StringMap::new(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_ms() -> u64 {
    60_000
}

impl HttpSettings {
    /// HTTP client configuration for these settings
    pub fn client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .retry(RetryPolicy {
                max_retries: self.max_retries,
                backoff: self.backoff,
                initial_backoff: Duration::from_millis(self.initial_backoff_ms),
                max_backoff: Duration::from_millis(self.max_backoff_ms),
            })
            .user_agent(&self.user_agent);

        builder = match self.rate_limit {
            Some(limit) => builder.rate_limit(limit),
            None => builder.no_rate_limit(),
        };
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        builder.build()
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a collection definition from a YAML file
pub fn load_collection(path: impl AsRef<Path>) -> Result<CollectionConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read collection file {}", path.display()))?;
    load_collection_from_str(&content)
}

/// Load a collection definition from a YAML string
pub fn load_collection_from_str(yaml: &str) -> Result<CollectionConfig> {
    let config: CollectionConfig = serde_yaml::from_str(yaml)?;
    validate_collection(&config)?;
    Ok(config)
}

fn validate_collection(config: &CollectionConfig) -> Result<()> {
    if config.name.trim().is_empty() {
        return Err(Error::config("Collection name cannot be empty"));
    }

    let endpoint = Url::parse(&config.endpoint)
        .map_err(|e| Error::invalid_value("endpoint", format!("'{}': {e}", config.endpoint)))?;
    if !matches!(endpoint.scheme(), "http" | "https") {
        return Err(Error::invalid_value(
            "endpoint",
            format!("unsupported scheme '{}'", endpoint.scheme()),
        ));
    }

    if config.pagination.page_size() == Some(0) {
        return Err(Error::invalid_value(
            "pagination.page_size",
            "must be greater than 0",
        ));
    }

    if config.http.timeout_secs == 0 {
        return Err(Error::invalid_value("http.timeout_secs", "must be greater than 0"));
    }

    if config.http.rate_limit.is_some_and(|limit| limit.requests_per_second == 0) {
        return Err(Error::invalid_value(
            "http.rate_limit.requests_per_second",
            "must be greater than 0",
        ));
    }

    Ok(())
}
