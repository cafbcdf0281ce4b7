//! Pagination module
//!
//! Supports: Offset/Limit, Page Number
//!
//! # Overview
//!
//! The pagination module describes how a collection pages (`PaginationConfig`)
//! and tracks progress through it (`PaginationCursor`). The cursor never
//! performs I/O; the sequence drives it one page at a time.

mod cursor;
mod types;

pub use cursor::PaginationCursor;
pub use types::{PageStyle, PaginationConfig};

#[cfg(test)]
mod tests;
