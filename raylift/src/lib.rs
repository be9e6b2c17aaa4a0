//! Raylift - enhancement and display pipeline for 16-bit radiographs
//!
//! # Overview
//!
//! Raylift takes a raw 16-bit grayscale radiograph and prepares it for an
//! interactive viewer:
//!
//! - Subject ROI detection (Otsu threshold + morphological cleanup)
//! - Multi-scale retinex decomposition for dynamic-range compression
//! - A five-stage contrast-protected enhancer (brightness, noise,
//!   contrast, halo suppression, thin-line protection)
//! - A cached window/level LUT engine for real-time 16-to-8-bit display
//!
//! Enhancement is best-effort: numerical edge cases degrade the affected
//! stage to identity and surface as warnings, never as failures.
//!
//! # Example
//!
//! ```
//! use raylift::{BitDepth, GrayImage};
//! use raylift::display::WindowLevel;
//!
//! // View a 16-bit image with an automatically chosen window.
//! let image = GrayImage::new(640, 480, BitDepth::Sixteen).unwrap();
//! let mut view = WindowLevel::with_auto_window(image);
//! let display = view.display_image();
//! assert_eq!(display.depth(), BitDepth::Eight);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use raylift_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use raylift_display as display;
pub use raylift_enhance as enhance;
pub use raylift_filter as filter;
pub use raylift_morph as morph;
pub use raylift_region as region;
