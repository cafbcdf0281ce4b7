//! Lazy result sequence
//!
//! A remote collection presented as an indexable, iterable sequence.
//!
//! # Overview
//!
//! Nothing is fetched until a caller iterates, indexes, slices or asks for
//! the length. Paginated collections are fetched page by page from the
//! requested start until the requested range (or the whole collection) is
//! cached; unpaginated collections are fetched in one request. The cache is
//! reused for every later access it covers.
//!
//! ```rust,ignore
//! use rest_queryset::{CollectionDescriptor, HttpClient, LazyResultSequence, PaginationConfig};
//! use std::sync::Arc;
//!
//! let descriptor = CollectionDescriptor::paginated(
//!     "https://api.example.com/users/",
//!     PaginationConfig::limit_offset(50),
//! )?;
//! let users = LazyResultSequence::json(descriptor, Arc::new(HttpClient::new()?));
//!
//! let first_ten = users.slice(0, 10).await?;   // one request
//! let total = users.len().await?;               // follows every page
//! ```

mod types;

pub use types::{CollectionDescriptor, SequenceStats};

use crate::decode::{ListDecoder, PageDecoder};
use crate::error::{Error, Result};
use crate::pagination::{PaginationConfig, PaginationCursor};
use crate::record::{JsonRecords, RecordFactory};
use crate::transport::Transport;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use types::{Freshness, SequenceState};
use url::Url;

/// Lazy, cached view over a remote collection
///
/// All access goes through one async mutex, so at most one evaluation is in
/// flight per sequence and concurrent callers see its completed result.
pub struct LazyResultSequence<F: RecordFactory> {
    descriptor: CollectionDescriptor,
    transport: Arc<dyn Transport>,
    factory: F,
    state: Mutex<SequenceState<F::Record>>,
}

impl LazyResultSequence<JsonRecords> {
    /// Create a sequence yielding raw JSON records
    pub fn json(descriptor: CollectionDescriptor, transport: Arc<dyn Transport>) -> Self {
        Self::new(descriptor, transport, JsonRecords)
    }
}

impl<F: RecordFactory> LazyResultSequence<F> {
    /// Create a stale sequence; nothing is fetched yet
    pub fn new(descriptor: CollectionDescriptor, transport: Arc<dyn Transport>, factory: F) -> Self {
        let state = SequenceState::new(&descriptor);
        Self {
            descriptor,
            transport,
            factory,
            state: Mutex::new(state),
        }
    }

    /// The collection this sequence reads
    pub fn descriptor(&self) -> &CollectionDescriptor {
        &self.descriptor
    }

    // ========================================================================
    // Evaluating access
    // ========================================================================

    /// Evaluate the whole collection and iterate over it
    pub async fn iterate(&self) -> Result<std::vec::IntoIter<F::Record>> {
        let mut state = self.state.lock().await;
        self.evaluate(&mut state, 0, None).await?;
        Ok(state.window(0, None).to_vec().into_iter())
    }

    /// Record at `index`
    ///
    /// Paginated collections fetch only the page holding `index`. Once the
    /// total is known, `index < total` is the only bound checked: the
    /// closed-end rule of [`slice`](Self::slice) does not apply, so
    /// `get(total - 1)` returns the last record.
    pub async fn get(&self, index: usize) -> Result<F::Record> {
        let mut state = self.state.lock().await;

        let end = match &self.descriptor {
            CollectionDescriptor::Unpaginated { .. } => None,
            CollectionDescriptor::Paginated { .. } => {
                if let Some(total) = state.known_total() {
                    if index >= total {
                        return Err(Error::index_out_of_bounds(index, total));
                    }
                }
                Some(index + 1)
            }
        };

        let start = if end.is_some() { index } else { 0 };
        self.evaluate(&mut state, start, end).await?;

        state
            .window(index, Some(index + 1))
            .first()
            .cloned()
            .ok_or_else(|| {
                let len = state
                    .known_total()
                    .unwrap_or(state.freshness.offset() + state.cache.len());
                Error::index_out_of_bounds(index, len)
            })
    }

    /// Records covering `[start, stop)`
    ///
    /// `stop` must be greater than `start`. Once a paginated collection has
    /// reported its size, `stop` must also be smaller than that size.
    pub async fn slice(&self, start: usize, stop: usize) -> Result<Vec<F::Record>> {
        let mut state = self.state.lock().await;

        if start >= stop {
            return Err(Error::invalid_range(
                start,
                stop,
                "start must be less than stop",
            ));
        }
        if self.descriptor.is_paginated() {
            if let Some(total) = state.known_total() {
                if stop >= total {
                    return Err(Error::invalid_range(
                        start,
                        stop,
                        format!("stop must be less than the collection size {total}"),
                    ));
                }
            }
        }

        self.evaluate(&mut state, start, Some(stop)).await?;
        Ok(state.window(start, Some(stop)).to_vec())
    }

    /// Number of records in the collection; evaluates all of it
    pub async fn len(&self) -> Result<usize> {
        let mut state = self.state.lock().await;
        self.evaluate(&mut state, 0, None).await?;
        Ok(state.window(0, None).len())
    }

    /// True if the collection has no records; evaluates all of it
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    // ========================================================================
    // Cache state
    // ========================================================================

    /// Drop the cache and pagination progress; the next access re-fetches
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        state.discard();
        state.cursor = self.descriptor.pagination().map(PaginationCursor::new);
    }

    /// True until an evaluation succeeds, and again after a failed one
    pub async fn is_stale(&self) -> bool {
        self.state.lock().await.freshness == Freshness::Stale
    }

    /// Number of records currently cached
    pub async fn cached_len(&self) -> usize {
        self.state.lock().await.cache.len()
    }

    /// Collection size declared by the server, if seen
    pub async fn known_total(&self) -> Option<usize> {
        self.state.lock().await.known_total()
    }

    /// Next unfetched index of the pagination cursor
    pub async fn cursor_position(&self) -> Option<usize> {
        self.state
            .lock()
            .await
            .cursor
            .as_ref()
            .map(PaginationCursor::position)
    }

    /// Network activity counters
    pub async fn stats(&self) -> SequenceStats {
        self.state.lock().await.stats
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Make the cache cover `[start, end)`, fetching if it does not already
    async fn evaluate(
        &self,
        state: &mut SequenceState<F::Record>,
        start: usize,
        end: Option<usize>,
    ) -> Result<()> {
        if state.freshness.covers(start, end, state.cache.len()) {
            state.stats.add_cache_hit();
            return Ok(());
        }

        state.stats.add_evaluation();
        state.discard();

        let outcome = match &self.descriptor {
            CollectionDescriptor::Unpaginated { endpoint } => self
                .fetch_all(state, endpoint)
                .await
                .map(|()| Freshness::Fresh {
                    start: 0,
                    exhausted: true,
                }),
            CollectionDescriptor::Paginated { endpoint, config } => self
                .fetch_pages(state, endpoint, config, start, end)
                .await
                .map(|exhausted| Freshness::Fresh { start, exhausted }),
        };

        match outcome {
            Ok(freshness) => {
                state.freshness = freshness;
                Ok(())
            }
            Err(e) => {
                state.discard();
                Err(e)
            }
        }
    }

    /// Fetch an unpaginated collection in one request
    async fn fetch_all(&self, state: &mut SequenceState<F::Record>, endpoint: &Url) -> Result<()> {
        let payload = self.transport.get(endpoint.as_str()).await?;
        state.stats.add_page();

        let records = ListDecoder::new()
            .decode(payload)?
            .into_iter()
            .map(|raw| self.factory.construct(raw))
            .collect::<Result<Vec<_>>>()?;

        debug!("Fetched {} records from {}", records.len(), endpoint);
        state.stats.add_records(records.len());
        state.cache = records;
        Ok(())
    }

    /// Fetch pages from `start` until `end` is reached or the collection ends
    ///
    /// Returns true if the fetch stopped because the collection ended.
    async fn fetch_pages(
        &self,
        state: &mut SequenceState<F::Record>,
        endpoint: &Url,
        config: &PaginationConfig,
        start: usize,
        end: Option<usize>,
    ) -> Result<bool> {
        let SequenceState {
            cache,
            cursor,
            stats,
            ..
        } = state;
        let cursor = cursor.get_or_insert_with(|| PaginationCursor::new(config));
        let decoder = PageDecoder::from_config(config);

        cursor.seek(start);
        loop {
            let url = cursor.page_url(endpoint);
            let payload = self.transport.get(url.as_str()).await?;
            stats.add_page();

            let page = decoder.decode(payload)?;
            let skip = cursor.leading_skip();
            let before = cache.len();
            for raw in page.results.into_iter().skip(skip) {
                cache.push(self.factory.construct(raw)?);
            }
            let received = cache.len() - before;
            stats.add_records(received);

            let more = cursor.record_response(page.count, received);
            debug!(
                "Page {}: {} records, position {}, total {:?}",
                url,
                received,
                cursor.position(),
                cursor.total()
            );

            // An explicit end keeps fetching until it is reached, but never
            // past the end of the collection
            let proceed = match end {
                None => more,
                Some(end) => more && cache.len() < end - start,
            };
            if !proceed {
                return Ok(!more);
            }
        }
    }
}

impl<F: RecordFactory> std::fmt::Debug for LazyResultSequence<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyResultSequence")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
