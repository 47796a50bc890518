/// Broad classification of a [`PaginationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A query value did not parse as an integer.
    InvalidInteger,
    /// A parsed value fell outside its allowed range.
    InvalidRange,
}

/// A parsed value that violates its bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("{param} number must be positive")]
    Negative { param: String, value: i64 },

    #[error("{param} must be between {min} and {max}")]
    OutOfBounds {
        param: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Rejection produced while extracting pagination values from a request.
///
/// Every variant is a client input error and terminal for the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("{param} parameter must be an integer")]
    InvalidInteger { param: String, value: String },

    #[error(transparent)]
    InvalidRange(#[from] RangeError),
}

impl PaginationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaginationError::InvalidInteger { .. } => ErrorKind::InvalidInteger,
            PaginationError::InvalidRange(_) => ErrorKind::InvalidRange,
        }
    }

    /// Name of the query parameter that caused the rejection.
    pub fn param(&self) -> &str {
        match self {
            PaginationError::InvalidInteger { param, .. } => param,
            PaginationError::InvalidRange(RangeError::Negative { param, .. }) => param,
            PaginationError::InvalidRange(RangeError::OutOfBounds { param, .. }) => param,
        }
    }
}
