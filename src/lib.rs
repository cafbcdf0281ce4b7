// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]

//! # rest-queryset
//!
//! Lazy, cached, paginated views over REST collections.
//!
//! ## Features
//!
//! - **Lazy Evaluation**: nothing is fetched until a record, a range or the length is asked for
//! - **Page-Aware Slicing**: a range fetches only the pages that cover it
//! - **Caching**: repeated access to a covered range never goes back to the network
//! - **Pagination Styles**: offset/limit and page number, with configurable parameter names
//! - **Typed Records**: raw JSON, any `serde` type, or a custom factory
//! - **HTTP Transport**: retries, backoff and rate limiting over `reqwest`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rest_queryset::{load_collection, HttpClient, LazyResultSequence, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let collection = load_collection("collections/users.yaml")?;
//!     let client = HttpClient::with_config(collection.http.client_config())?;
//!     let users = LazyResultSequence::json(collection.descriptor()?, Arc::new(client));
//!
//!     let first_page = users.slice(0, 20).await?;
//!     let everyone: Vec<_> = users.iterate().await?.collect();
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    LazyResultSequence                       │
//! │  iterate()   get(i)   slice(s, e)   len()   invalidate()    │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┼───────────────┬───────────────┐
//! │ Pagination │    Decode      │   Transport   │    Records    │
//! ├────────────┼────────────────┼───────────────┼───────────────┤
//! │ Cursor     │ Bare list      │ HttpClient    │ JSON          │
//! │ Offset     │ Page envelope  │ Retry         │ Serde         │
//! │ Page number│                │ Rate limit    │ Closure       │
//! └────────────┴────────────────┴───────────────┴───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document config enum fields before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Transport seam between sequences and the network
pub mod transport;

/// Record construction from raw JSON
pub mod record;

/// Pagination cursor and configuration
pub mod pagination;

/// Response decoders (bare list, page envelope)
pub mod decode;

/// HTTP client with retry and rate limiting
pub mod http;

/// Lazy result sequence
pub mod sequence;

/// YAML collection definitions
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_collection, load_collection_from_str, CollectionConfig};
pub use http::{HttpClient, HttpClientConfig};
pub use pagination::{PageStyle, PaginationConfig, PaginationCursor};
pub use record::{JsonRecords, RecordFactory, SerdeRecords};
pub use sequence::{CollectionDescriptor, LazyResultSequence, SequenceStats};
pub use transport::Transport;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
