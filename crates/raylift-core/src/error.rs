//! Error types for raylift-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// raylift-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid bit depth
    #[error("invalid bit depth: {0} bpp (expected 8 or 16)")]
    InvalidDepth(u32),

    /// Sample buffer length does not match the image dimensions
    #[error("bad sample count: expected {expected}, got {actual}")]
    BadSampleCount { expected: usize, actual: usize },

    /// A sample value exceeds the ceiling of the declared bit depth
    #[error("sample value {value} exceeds {depth} bpp ceiling")]
    SampleOutOfRange { value: u16, depth: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Image/mask or image/image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for raylift-core operations
pub type Result<T> = std::result::Result<T, Error>;
