//! Pagination configuration types
//!
//! Static description of how a collection pages: which query parameters carry
//! the page position, how large a page is, and where the records and the
//! server-declared total live in each page envelope.

/// How the page position is encoded in the request query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStyle {
    /// Offset/limit pagination
    ///
    /// Common patterns:
    /// - `?offset=40&limit=20`
    /// - `?skip=40&take=20`
    LimitOffset {
        /// Query parameter name for the offset
        offset_param: String,
        /// Query parameter name for the limit
        limit_param: String,
    },

    /// Page number pagination
    ///
    /// Common patterns:
    /// - `?page=3`
    /// - `?page=3&page_size=20`
    PageNumber {
        /// Query parameter name for the page number
        page_param: String,
        /// Optional query parameter name for the page size
        page_size_param: Option<String>,
        /// Number of the first page (usually 0 or 1)
        first_page: u32,
    },
}

impl Default for PageStyle {
    fn default() -> Self {
        Self::limit_offset("offset", "limit")
    }
}

impl PageStyle {
    /// Create an offset/limit style
    pub fn limit_offset(offset_param: impl Into<String>, limit_param: impl Into<String>) -> Self {
        Self::LimitOffset {
            offset_param: offset_param.into(),
            limit_param: limit_param.into(),
        }
    }

    /// Create a page number style
    pub fn page_number(page_param: impl Into<String>, first_page: u32) -> Self {
        Self::PageNumber {
            page_param: page_param.into(),
            page_size_param: None,
            first_page,
        }
    }

    /// Create a page number style that also sends the page size
    pub fn page_number_with_size(
        page_param: impl Into<String>,
        page_size_param: impl Into<String>,
        first_page: u32,
    ) -> Self {
        Self::PageNumber {
            page_param: page_param.into(),
            page_size_param: Some(page_size_param.into()),
            first_page,
        }
    }
}

/// Configuration for a paginated collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Query string encoding of the page position
    pub style: PageStyle,
    /// Number of records requested per page
    pub page_size: u32,
    /// Field of the page envelope holding the records
    pub results_field: String,
    /// Field of the page envelope holding the collection size
    pub count_field: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            style: PageStyle::default(),
            page_size: 20,
            results_field: "results".to_string(),
            count_field: "count".to_string(),
        }
    }
}

impl PaginationConfig {
    /// Create offset/limit pagination with the default parameter names
    pub fn limit_offset(page_size: u32) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Create page number pagination (`page` + `page_size`, first page 1)
    pub fn page_number(page_size: u32) -> Self {
        Self {
            style: PageStyle::page_number_with_size("page", "page_size", 1),
            page_size,
            ..Default::default()
        }
    }

    /// Set the page style
    #[must_use]
    pub fn with_style(mut self, style: PageStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the results field
    #[must_use]
    pub fn with_results_field(mut self, field: impl Into<String>) -> Self {
        self.results_field = field.into();
        self
    }

    /// Set the count field
    #[must_use]
    pub fn with_count_field(mut self, field: impl Into<String>) -> Self {
        self.count_field = field.into();
        self
    }
}
