//! Sequence types
//!
//! The collection descriptor handed to a sequence, the freshness state of its
//! cache, and the counters it keeps.

use crate::error::Result;
use crate::pagination::{PaginationConfig, PaginationCursor};
use url::Url;

/// The remote collection a sequence reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionDescriptor {
    /// Answers with a bare array holding the whole collection
    Unpaginated {
        /// Collection URL
        endpoint: Url,
    },
    /// Answers with one page envelope per request
    Paginated {
        /// Collection URL; page parameters are appended to its query
        endpoint: Url,
        /// How the collection pages
        config: PaginationConfig,
    },
}

impl CollectionDescriptor {
    /// Describe an unpaginated collection
    pub fn unpaginated(endpoint: &str) -> Result<Self> {
        Ok(Self::Unpaginated {
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Describe a paginated collection
    pub fn paginated(endpoint: &str, config: PaginationConfig) -> Result<Self> {
        Ok(Self::Paginated {
            endpoint: Url::parse(endpoint)?,
            config,
        })
    }

    /// Collection URL
    pub fn endpoint(&self) -> &Url {
        match self {
            Self::Unpaginated { endpoint } | Self::Paginated { endpoint, .. } => endpoint,
        }
    }

    /// Pagination config, if the collection pages
    pub fn pagination(&self) -> Option<&PaginationConfig> {
        match self {
            Self::Unpaginated { .. } => None,
            Self::Paginated { config, .. } => Some(config),
        }
    }

    /// True if the collection pages
    pub fn is_paginated(&self) -> bool {
        matches!(self, Self::Paginated { .. })
    }
}

/// Counters for a sequence's network activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceStats {
    /// Evaluations that went to the network
    pub evaluations: usize,
    /// Accesses served from the cache
    pub cache_hits: usize,
    /// Transport calls issued
    pub pages_fetched: usize,
    /// Records constructed
    pub records_fetched: usize,
}

impl SequenceStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_evaluation(&mut self) {
        self.evaluations += 1;
    }

    pub(crate) fn add_cache_hit(&mut self) {
        self.cache_hits += 1;
    }

    pub(crate) fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    pub(crate) fn add_records(&mut self, count: usize) {
        self.records_fetched += count;
    }
}

/// What the cache currently reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Freshness {
    /// Nothing trustworthy is cached
    Stale,
    /// The cache holds records from `start` onwards, in server order
    Fresh {
        /// Collection index of the first cached record
        start: usize,
        /// The fetch stopped because the collection ended
        exhausted: bool,
    },
}

impl Freshness {
    /// Whether `[start, end)` can be served from `cached` records
    ///
    /// `end == None` asks for everything from `start` to the end of the
    /// collection, which only an exhausted window can answer.
    pub(crate) fn covers(self, start: usize, end: Option<usize>, cached: usize) -> bool {
        match self {
            Self::Stale => false,
            Self::Fresh {
                start: from,
                exhausted,
            } => {
                if start < from {
                    return false;
                }
                if exhausted {
                    return true;
                }
                end.is_some_and(|end| end <= from + cached)
            }
        }
    }

    /// Collection index of the first cached record
    pub(crate) fn offset(self) -> usize {
        match self {
            Self::Stale => 0,
            Self::Fresh { start, .. } => start,
        }
    }
}

/// Mutable state of a sequence, guarded by its mutex
#[derive(Debug)]
pub(crate) struct SequenceState<R> {
    pub(crate) cache: Vec<R>,
    pub(crate) freshness: Freshness,
    pub(crate) cursor: Option<PaginationCursor>,
    pub(crate) stats: SequenceStats,
}

impl<R> SequenceState<R> {
    pub(crate) fn new(descriptor: &CollectionDescriptor) -> Self {
        Self {
            cache: Vec::new(),
            freshness: Freshness::Stale,
            cursor: descriptor.pagination().map(PaginationCursor::new),
            stats: SequenceStats::new(),
        }
    }

    /// Drop the cache and mark it stale
    pub(crate) fn discard(&mut self) {
        self.cache.clear();
        self.freshness = Freshness::Stale;
    }

    /// Collection size declared by the server, if known
    pub(crate) fn known_total(&self) -> Option<usize> {
        self.cursor.as_ref().and_then(PaginationCursor::total)
    }

    /// Cached records covering `[start, end)`, clamped to what is cached
    pub(crate) fn window(&self, start: usize, end: Option<usize>) -> &[R] {
        if self.freshness == Freshness::Stale {
            return &[];
        }
        let from = self.freshness.offset();
        let len = self.cache.len();
        let lo = start.saturating_sub(from).min(len);
        let hi = end.map_or(len, |end| end.saturating_sub(from).min(len)).max(lo);
        &self.cache[lo..hi]
    }
}
