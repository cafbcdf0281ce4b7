//! Record construction
//!
//! A `RecordFactory` turns one raw item of a response into a domain record.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// Builds a record from one raw response item
pub trait RecordFactory: Send + Sync {
    /// The record type produced
    type Record: Clone + Send + Sync;

    /// Construct a record from a raw item
    fn construct(&self, raw: JsonValue) -> Result<Self::Record>;
}

impl<F, R> RecordFactory for F
where
    F: Fn(JsonValue) -> Result<R> + Send + Sync,
    R: Clone + Send + Sync,
{
    type Record = R;

    fn construct(&self, raw: JsonValue) -> Result<R> {
        self(raw)
    }
}

// ============================================================================
// Json Records
// ============================================================================

/// Keeps raw items as `serde_json::Value`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecords;

impl RecordFactory for JsonRecords {
    type Record = JsonValue;

    fn construct(&self, raw: JsonValue) -> Result<JsonValue> {
        Ok(raw)
    }
}

// ============================================================================
// Serde Records
// ============================================================================

/// Deserializes raw items into `T`
pub struct SerdeRecords<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeRecords<T> {
    /// Create a new serde record factory
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeRecords<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeRecords<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SerdeRecords<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerdeRecords")
            .field("record", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> RecordFactory for SerdeRecords<T>
where
    T: DeserializeOwned + Clone + Send + Sync,
{
    type Record = T;

    fn construct(&self, raw: JsonValue) -> Result<T> {
        serde_json::from_value(raw).map_err(|e| Error::record(e.to_string()))
    }
}
