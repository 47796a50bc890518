use std::str::FromStr;

use pagekit_core::config::{
    DEFAULT_MAX_PAGE_SIZE, DEFAULT_MIN_PAGE_SIZE, DEFAULT_PAGE, DEFAULT_PAGE_PARAM,
    DEFAULT_PAGE_SIZE, DEFAULT_SIZE_PARAM,
};
use pagekit_core::header::DEFAULT_HEADER_PREFIX;
use pagekit_core::PaginationConfig;

/// Startup configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Pagination settings applied to the `/api/v1` routes.
    pub pagination: PaginationConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default   |
    /// |----------------------------|-----------|
    /// | `HOST`                     | `0.0.0.0` |
    /// | `PORT`                     | `3000`    |
    /// | `PAGINATION_PAGE_PARAM`    | `page`    |
    /// | `PAGINATION_SIZE_PARAM`    | `size`    |
    /// | `PAGINATION_DEFAULT_PAGE`  | `1`       |
    /// | `PAGINATION_DEFAULT_SIZE`  | `10`      |
    /// | `PAGINATION_MIN_SIZE`      | `10`      |
    /// | `PAGINATION_MAX_SIZE`      | `100`     |
    /// | `PAGINATION_HEADER_PREFIX` | `X-` (empty means no prefix) |
    /// | `PAGINATION_HEADERS`       | `true` (`false` disables echo headers) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = string("HOST", "0.0.0.0");
        let port: u16 = parse(&lookup, "PORT", 3000, "u16")?;

        let header_prefix = string("PAGINATION_HEADER_PREFIX", DEFAULT_HEADER_PREFIX);
        let headers: bool = parse(&lookup, "PAGINATION_HEADERS", true, "bool")?;
        let pagination = PaginationConfig {
            page_param: string("PAGINATION_PAGE_PARAM", DEFAULT_PAGE_PARAM),
            size_param: string("PAGINATION_SIZE_PARAM", DEFAULT_SIZE_PARAM),
            default_page: parse(&lookup, "PAGINATION_DEFAULT_PAGE", DEFAULT_PAGE, "integer")?,
            default_size: parse(&lookup, "PAGINATION_DEFAULT_SIZE", DEFAULT_PAGE_SIZE, "integer")?,
            min_size: parse(&lookup, "PAGINATION_MIN_SIZE", DEFAULT_MIN_PAGE_SIZE, "integer")?,
            max_size: parse(&lookup, "PAGINATION_MAX_SIZE", DEFAULT_MAX_PAGE_SIZE, "integer")?,
            header_prefix: headers.then_some(header_prefix),
        };

        Ok(Self {
            host,
            port,
            pagination,
        })
    }
}

fn parse<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            expected,
            value,
        }),
    }
}
