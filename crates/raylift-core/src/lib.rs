//! Core data structures for raylift.
//!
//! This crate owns the shared primitives used by every other raylift crate:
//!
//! - [`GrayImage`]: a width×height grid of unsigned samples at 8 or 16 bpp
//! - [`FloatImage`]: an f32 workspace for intermediate computations
//! - [`RoiMask`]: a binary region-of-interest mask
//! - histogram and statistics helpers over those containers
//!
//! All transforms in raylift are pure: an operation consuming a `GrayImage`
//! returns a new buffer and never mutates caller-owned data.

pub mod error;
mod float;
pub mod image;
mod mask;

pub use error::{Error, Result};
pub use float::FloatImage;
pub use image::{BitDepth, GrayImage};
pub use image::histogram::{histogram, percentile_bounds};
pub use mask::RoiMask;
