//! Extraction, validation and publication of pagination values.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. page parses as an integer
//! 2. page is not negative
//! 3. size parses as an integer
//! 4. size lies within `[min_size, max_size]`
//!
//! Page `0` is accepted and the page has no upper bound. Whether pages are
//! zero- or one-based is up to the caller.

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;
use crate::context::PaginationContext;
use crate::error::{PaginationError, RangeError};

/// Validated pagination values for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub size: i64,
}

/// Read and validate the page and size parameters without touching `ctx`.
pub fn extract<C>(config: &PaginationConfig, ctx: &C) -> Result<Pagination, PaginationError>
where
    C: PaginationContext + ?Sized,
{
    let page = parse_param(ctx, &config.page_param, config.default_page)?;
    if page < 0 {
        return Err(RangeError::Negative {
            param: config.page_param.clone(),
            value: page,
        }
        .into());
    }

    let size = parse_param(ctx, &config.size_param, config.default_size)?;
    if size < config.min_size || size > config.max_size {
        return Err(RangeError::OutOfBounds {
            param: config.size_param.clone(),
            value: size,
            min: config.min_size,
            max: config.max_size,
        }
        .into());
    }

    Ok(Pagination { page, size })
}

/// Store `pagination` in `ctx` under the configured parameter names and, when
/// enabled, queue the echo headers.
pub fn publish<C>(config: &PaginationConfig, pagination: &Pagination, ctx: &mut C)
where
    C: PaginationContext + ?Sized,
{
    ctx.set_value(&config.page_param, pagination.page);
    ctx.set_value(&config.size_param, pagination.size);

    let echoes = [
        (&config.page_param, pagination.page),
        (&config.size_param, pagination.size),
    ];
    for (param, value) in echoes {
        if let Some(name) = config.header_name(param) {
            ctx.set_header(&name, &value.to_string());
        }
    }
}

/// [`extract`] then [`publish`]. On error `ctx` is left untouched.
pub fn intercept<C>(config: &PaginationConfig, ctx: &mut C) -> Result<Pagination, PaginationError>
where
    C: PaginationContext + ?Sized,
{
    let pagination = extract(config, &*ctx)?;
    publish(config, &pagination, ctx);
    Ok(pagination)
}

fn parse_param<C>(ctx: &C, param: &str, default: i64) -> Result<i64, PaginationError>
where
    C: PaginationContext + ?Sized,
{
    let raw = ctx.query_or(param, &default.to_string());
    raw.parse::<i64>()
        .map_err(|_| PaginationError::InvalidInteger {
            param: param.to_string(),
            value: raw,
        })
}
