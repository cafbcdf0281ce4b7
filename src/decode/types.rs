//! Decoder types
//!
//! The two payload shapes a collection can answer with.

use crate::types::JsonValue;

/// One decoded page of a paginated collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageEnvelope {
    /// Raw records in server order
    pub results: Vec<JsonValue>,
    /// Collection size declared by the server, if present
    pub count: Option<usize>,
}

impl PageEnvelope {
    /// Create an envelope
    pub fn new(results: Vec<JsonValue>, count: Option<usize>) -> Self {
        Self { results, count }
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if the page carried no records
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
