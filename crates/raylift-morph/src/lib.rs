//! Morphological operations for raylift
//!
//! Brick (rectangular) structuring elements only: that is all the ROI
//! cleanup and thin-line detection need. Brick erosion/dilation are
//! separable, so every operation runs as a horizontal pass followed by a
//! vertical pass.
//!
//! Border convention: coordinates are clamped to the image rectangle
//! (replicated border), so a mask that touches the frame edge is not eaten
//! away by the cleanup.

mod gray;
mod mask_ops;

pub use gray::{dilate_gray, erode_gray, open_gray};
pub use mask_ops::{close_mask, dilate_mask, erode_mask, open_mask};
