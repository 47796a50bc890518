//! Request preprocessing middleware.
//!
//! - [`pagination::PaginationLayer`] -- Validates `page`/`size` query parameters.
//! - [`pagination::Paginated`] -- Extracts the validated values in handlers.
//! - [`pagination::PageValues`] -- Values keyed by configured parameter name.

pub mod pagination;

pub use pagination::{PageValues, Paginated, PaginationLayer, PaginationService};
