//! Error types for rest-queryset
//!
//! Every public API returns `Result<T, Error>` with the error defined here.
//! Range and index errors are raised before any network call; transport
//! errors are passed through from the HTTP layer unchanged.

use thiserror::Error;

/// The main error type for rest-queryset
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Collection Definition Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid collection YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Payload Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to construct record: {message}")]
    RecordConstruction { message: String },

    // ============================================================================
    // Caller Errors
    // ============================================================================
    #[error("Invalid range [{start}, {end}): {message}")]
    InvalidRange {
        start: usize,
        end: usize,
        message: String,
    },

    #[error("Index {index} out of bounds for collection of {len} records")]
    IndexOutOfBounds { index: usize, len: usize },

    // ============================================================================
    // Other Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn record(message: impl Into<String>) -> Self {
        Self::RecordConstruction {
            message: message.into(),
        }
    }

    pub fn invalid_range(start: usize, end: usize, message: impl Into<String>) -> Self {
        Self::InvalidRange {
            start,
            end,
            message: message.into(),
        }
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Transient failure the HTTP client may retry
    ///
    /// 429, gateway/server 5xx (including 520-524), timeouts and failed
    /// connections. Other statuses and transport errors are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => {
                matches!(status, 429 | 500 | 502 | 503 | 504 | 520..=524)
            }
            Error::Http(e) => e.is_connect(),
            _ => false,
        }
    }

    /// Raised by the transport rather than by the sequence itself
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::RateLimited { .. }
                | Error::Timeout { .. }
                | Error::InvalidUrl(_)
        )
    }

    /// Caller asked for a range or index the collection cannot serve
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Error::InvalidRange { .. } | Error::IndexOutOfBounds { .. }
        )
    }
}

/// Result type alias for rest-queryset
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Wrap the error with a message
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Wrap the error with a lazily built message
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.with_context(|| message.into())
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
