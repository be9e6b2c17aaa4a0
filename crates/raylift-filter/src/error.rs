//! Error types for raylift-filter

use thiserror::Error;

/// Filter operation error type
#[derive(Error, Debug)]
pub enum FilterError {
    /// Invalid filter parameters
    #[error("invalid filter parameters: {0}")]
    InvalidParameters(String),

    /// Error from the core crate
    #[error(transparent)]
    Core(#[from] raylift_core::Error),
}

/// Result type alias for filter operations
pub type FilterResult<T> = std::result::Result<T, FilterError>;
