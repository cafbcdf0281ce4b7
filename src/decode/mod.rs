//! Response decoder module
//!
//! Supports: bare JSON arrays, JSON page envelopes
//!
//! # Overview
//!
//! Unpaginated collections answer with a bare array of records. Paginated
//! collections answer with an object carrying the records and, optionally,
//! the collection size.

mod decoders;
mod types;

pub use decoders::{ListDecoder, PageDecoder};
pub use types::PageEnvelope;
