//! Pagination configuration and its named overrides.
//!
//! A [`PaginationConfig`] is built once, when the middleware is created, and
//! shared read-only by every request it handles. No validation happens here:
//! a configuration with `min_size > max_size` is accepted and makes every
//! request fail the size bounds check.

use serde::{Deserialize, Serialize};

use crate::header::{construct_header_with_prefix, DEFAULT_HEADER_PREFIX};

pub const DEFAULT_PAGE_PARAM: &str = "page";
pub const DEFAULT_SIZE_PARAM: &str = "size";
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const DEFAULT_MIN_PAGE_SIZE: i64 = 10;
pub const DEFAULT_MAX_PAGE_SIZE: i64 = 100;

/// Parameter names, defaults and bounds used by the pagination interceptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Query key holding the page number (default: `page`).
    pub page_param: String,
    /// Query key holding the page size (default: `size`).
    pub size_param: String,
    /// Page used when the page parameter is absent (default: `1`).
    pub default_page: i64,
    /// Size used when the size parameter is absent (default: `10`).
    pub default_size: i64,
    /// Smallest accepted page size, inclusive (default: `10`).
    pub min_size: i64,
    /// Largest accepted page size, inclusive (default: `100`).
    pub max_size: i64,
    /// Prefix for the echoed response headers (default: `X-`). An empty prefix
    /// yields bare capitalized names; `None` disables the headers.
    pub header_prefix: Option<String>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            size_param: DEFAULT_SIZE_PARAM.to_string(),
            default_page: DEFAULT_PAGE,
            default_size: DEFAULT_PAGE_SIZE,
            min_size: DEFAULT_MIN_PAGE_SIZE,
            max_size: DEFAULT_MAX_PAGE_SIZE,
            header_prefix: Some(DEFAULT_HEADER_PREFIX.to_string()),
        }
    }
}

/// A single named override applied on top of the default configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationOption {
    PageParam(String),
    SizeParam(String),
    DefaultPage(i64),
    DefaultSize(i64),
    MinSize(i64),
    MaxSize(i64),
    HeaderPrefix(Option<String>),
}

impl PaginationOption {
    /// Overwrite the one field this option targets.
    pub fn apply(self, config: &mut PaginationConfig) {
        match self {
            PaginationOption::PageParam(name) => config.page_param = name,
            PaginationOption::SizeParam(name) => config.size_param = name,
            PaginationOption::DefaultPage(page) => config.default_page = page,
            PaginationOption::DefaultSize(size) => config.default_size = size,
            PaginationOption::MinSize(min) => config.min_size = min,
            PaginationOption::MaxSize(max) => config.max_size = max,
            PaginationOption::HeaderPrefix(prefix) => config.header_prefix = prefix,
        }
    }
}

impl PaginationConfig {
    /// Positional constructor. The header prefix keeps its default.
    pub fn new(
        page_param: impl Into<String>,
        size_param: impl Into<String>,
        default_page: i64,
        default_size: i64,
        min_size: i64,
        max_size: i64,
    ) -> Self {
        Self {
            page_param: page_param.into(),
            size_param: size_param.into(),
            default_page,
            default_size,
            min_size,
            max_size,
            ..Self::default()
        }
    }

    /// Start from the defaults and apply `options` in order.
    ///
    /// ```
    /// use pagekit_core::{PaginationConfig, PaginationOption};
    ///
    /// let config = PaginationConfig::with_options([
    ///     PaginationOption::PageParam("pages".into()),
    ///     PaginationOption::MaxSize(25),
    /// ]);
    /// assert_eq!(config.page_param, "pages");
    /// assert_eq!(config.max_size, 25);
    /// assert_eq!(config.size_param, "size");
    /// ```
    pub fn with_options(options: impl IntoIterator<Item = PaginationOption>) -> Self {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }

    pub fn page_param(mut self, name: impl Into<String>) -> Self {
        self.page_param = name.into();
        self
    }

    pub fn size_param(mut self, name: impl Into<String>) -> Self {
        self.size_param = name.into();
        self
    }

    pub fn default_page(mut self, page: i64) -> Self {
        self.default_page = page;
        self
    }

    pub fn default_size(mut self, size: i64) -> Self {
        self.default_size = size;
        self
    }

    pub fn min_size(mut self, min: i64) -> Self {
        self.min_size = min;
        self
    }

    pub fn max_size(mut self, max: i64) -> Self {
        self.max_size = max;
        self
    }

    pub fn header_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.header_prefix = Some(prefix.into());
        self
    }

    /// Disable the echoed response headers.
    pub fn without_headers(mut self) -> Self {
        self.header_prefix = None;
        self
    }

    /// Whether successful requests echo their values as response headers.
    pub fn headers_enabled(&self) -> bool {
        self.header_prefix.is_some()
    }

    /// Response header name for `param`, or `None` when headers are disabled.
    pub fn header_name(&self, param: &str) -> Option<String> {
        self.header_prefix
            .as_deref()
            .map(|prefix| construct_header_with_prefix(prefix, param))
    }
}
