//! Pagination cursor
//!
//! Pure state: where the next fetch starts, the collection size once the
//! server has declared it, and whether another page is worth requesting.

use super::types::{PageStyle, PaginationConfig};
use crate::types::QueryParams;
use url::Url;

/// Tracks progress through a paginated collection
#[derive(Debug, Clone)]
pub struct PaginationCursor {
    style: PageStyle,
    page_size: u32,
    /// Index of the next unfetched record
    position: usize,
    /// Collection size declared by the server; first report wins
    total: Option<usize>,
    /// Records kept from the most recent page
    last_page_count: usize,
    /// Zero-based page to request next; set by `seek`, then one per response
    page: usize,
    /// Records to drop from the head of the next page
    skip: usize,
}

impl PaginationCursor {
    /// Create a cursor at position 0 with an unknown total
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            style: config.style.clone(),
            page_size: config.page_size.max(1),
            position: 0,
            total: None,
            last_page_count: 0,
            page: 0,
            skip: 0,
        }
    }

    /// Move the next-fetch pointer
    ///
    /// Only called when an evaluation starts. Page numbers are derived from
    /// the configured page size here, once; after that each response moves
    /// to the following page whatever size the server actually served.
    pub fn seek(&mut self, position: usize) {
        self.position = match self.total {
            Some(total) => position.min(total),
            None => position,
        };
        let size = self.page_size as usize;
        self.page = self.position / size;
        self.skip = self.position % size;
        self.last_page_count = 0;
    }

    /// Index of the next unfetched record
    pub fn position(&self) -> usize {
        self.position
    }

    /// Collection size, if the server has reported it
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// Records kept from the most recent page
    pub fn last_page_count(&self) -> usize {
        self.last_page_count
    }

    /// Records requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// True once the total is known and reached
    pub fn is_exhausted(&self) -> bool {
        self.total.is_some_and(|total| self.position >= total)
    }

    /// Query parameters for the next fetch
    pub fn request_parameters(&self) -> QueryParams {
        let size = self.page_size as usize;
        match &self.style {
            PageStyle::LimitOffset {
                offset_param,
                limit_param,
            } => vec![
                (offset_param.clone(), self.position.to_string()),
                (limit_param.clone(), size.to_string()),
            ],
            PageStyle::PageNumber {
                page_param,
                page_size_param,
                first_page,
            } => {
                let page = self.page + *first_page as usize;
                let mut params = vec![(page_param.clone(), page.to_string())];
                if let Some(param) = page_size_param {
                    params.push((param.clone(), size.to_string()));
                }
                params
            }
        }
    }

    /// Records at the head of the next page that precede the position
    ///
    /// Always 0 for offset/limit. For page numbers it is non-zero only for
    /// the first page after a seek to a position that is not a multiple of
    /// the page size.
    pub fn leading_skip(&self) -> usize {
        match self.style {
            PageStyle::LimitOffset { .. } => 0,
            PageStyle::PageNumber { .. } => self.skip,
        }
    }

    /// Build the URL of the next page from the collection endpoint
    ///
    /// Query pairs already on the endpoint are kept unless a page parameter
    /// replaces them.
    pub fn page_url(&self, endpoint: &Url) -> Url {
        let params = self.request_parameters();
        let retained: QueryParams = endpoint
            .query_pairs()
            .filter(|(key, _)| !params.iter().any(|(name, _)| name == key))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained.iter().chain(params.iter()));
        url
    }

    /// Record a page response and decide whether to fetch another page
    ///
    /// Continues while the page was non-empty and the position is still
    /// short of the total (or the total is unknown).
    ///
    /// The position normally only moves forward. The exception is a seek
    /// past the end made before the total was known: once the total arrives
    /// the position is pulled back to it, keeping `position <= total`.
    pub fn record_response(&mut self, total: Option<usize>, count_returned: usize) -> bool {
        if self.total.is_none() {
            self.total = total;
        }

        self.last_page_count = count_returned;
        self.page += 1;
        self.skip = 0;
        self.position += count_returned;
        if let Some(total) = self.total {
            self.position = self.position.min(total);
        }

        count_returned > 0 && !self.is_exhausted()
    }
}
