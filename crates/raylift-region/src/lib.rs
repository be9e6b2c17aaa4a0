//! Region-of-interest detection for raylift
//!
//! Separates the "subject" region of a transmission X-ray from the
//! saturated/background area: an automatically chosen global threshold
//! (Otsu) binarizes the frame, then a morphological close-then-open removes
//! speckle and fills pinholes.
//!
//! Detection never fails: a degenerate image (constant, or otherwise
//! unthresholdable) yields an all-ON mask so downstream stages process the
//! whole frame instead of silently producing an empty result.

mod detect;
mod otsu;

pub use detect::{RoiOptions, ThresholdPolarity, detect_roi};
pub use otsu::otsu_threshold;
