//! Framework-neutral pagination parameter handling.
//!
//! Reads a page number and a page size from a request's query string,
//! validates them against a [`config::PaginationConfig`], and publishes the
//! result into a host-provided [`context::PaginationContext`].

pub mod config;
pub mod context;
pub mod error;
pub mod header;
pub mod paginate;

pub use config::{PaginationConfig, PaginationOption};
pub use context::PaginationContext;
pub use error::{ErrorKind, PaginationError, RangeError};
pub use header::{construct_header, construct_header_with_prefix};
pub use paginate::{extract, intercept, publish, Pagination};

#[cfg(test)]
pub(crate) mod testing;
