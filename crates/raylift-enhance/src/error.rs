//! Error types for raylift-enhance
//!
//! Only malformed top-level input is an error here; recoverable numerical
//! degradations travel as [`StageWarning`](crate::StageWarning) values in
//! the pipeline outcome instead.

use thiserror::Error;

/// Enhancement pipeline error type
#[derive(Error, Debug)]
pub enum EnhanceError {
    /// Error from the core crate (dimension mismatch, invalid input)
    #[error(transparent)]
    Core(#[from] raylift_core::Error),
}

/// Result type alias for enhancement operations
pub type EnhanceResult<T> = std::result::Result<T, EnhanceError>;
