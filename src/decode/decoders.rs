//! Decoder implementations
//!
//! `ListDecoder` reads a bare array; `PageDecoder` reads a page envelope.
//! Which one runs is decided by the collection descriptor, never by the
//! shape of the payload.

use super::types::PageEnvelope;
use crate::error::{Error, Result};
use crate::pagination::PaginationConfig;
use crate::types::JsonValue;

// ============================================================================
// List Decoder
// ============================================================================

/// Decoder for unpaginated collections (`[{...}, {...}]`)
#[derive(Debug, Clone, Copy, Default)]
pub struct ListDecoder;

impl ListDecoder {
    /// Create a new list decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode a bare JSON array into raw records
    pub fn decode(&self, payload: JsonValue) -> Result<Vec<JsonValue>> {
        match payload {
            JsonValue::Array(items) => Ok(items),
            other => Err(Error::decode(format!(
                "expected a JSON array, got {}",
                kind(&other)
            ))),
        }
    }
}

// ============================================================================
// Page Decoder
// ============================================================================

/// Decoder for paginated collections (`{"count": 5, "results": [...]}`)
#[derive(Debug, Clone)]
pub struct PageDecoder {
    /// Dot path of the records array
    results_path: String,
    /// Dot path of the collection size
    count_path: String,
}

impl Default for PageDecoder {
    fn default() -> Self {
        Self::new("results", "count")
    }
}

impl PageDecoder {
    /// Create a page decoder for the given field paths
    pub fn new(results_path: impl Into<String>, count_path: impl Into<String>) -> Self {
        Self {
            results_path: results_path.into(),
            count_path: count_path.into(),
        }
    }

    /// Create a page decoder from a pagination config
    pub fn from_config(config: &PaginationConfig) -> Self {
        Self::new(&config.results_field, &config.count_field)
    }

    /// Decode a page envelope
    ///
    /// The records field is required and must be an array. The count field
    /// is optional; `null` reads as absent.
    pub fn decode(&self, mut payload: JsonValue) -> Result<PageEnvelope> {
        if !payload.is_object() {
            return Err(Error::decode(format!(
                "expected a page object, got {}",
                kind(&payload)
            )));
        }

        let count = match payload.pointer(&to_pointer(&self.count_path)) {
            None | Some(JsonValue::Null) => None,
            Some(value) => Some(parse_count(value).ok_or_else(|| {
                Error::decode(format!(
                    "field '{}' is not a record count: {value}",
                    self.count_path
                ))
            })?),
        };

        let results = match payload
            .pointer_mut(&to_pointer(&self.results_path))
            .map(JsonValue::take)
        {
            Some(JsonValue::Array(items)) => items,
            Some(other) => {
                return Err(Error::decode(format!(
                    "field '{}' must be an array, got {}",
                    self.results_path,
                    kind(&other)
                )))
            }
            None => {
                return Err(Error::decode(format!(
                    "missing field '{}' in page",
                    self.results_path
                )))
            }
        };

        Ok(PageEnvelope::new(results, count))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Convert a dot path (`data.items`, `$.meta.total`) into a JSON pointer
fn to_pointer(path: &str) -> String {
    let path = path.strip_prefix("$.").unwrap_or(path);
    path.split('.')
        .map(|part| part.replace('~', "~0").replace('/', "~1"))
        .fold(String::new(), |mut pointer, part| {
            pointer.push('/');
            pointer.push_str(&part);
            pointer
        })
}

/// Read a non-negative count from a number or numeric string
fn parse_count(value: &JsonValue) -> Option<usize> {
    match value {
        JsonValue::Number(n) => n.as_u64().map(|n| n as usize),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
