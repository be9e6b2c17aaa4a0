//! Content-adaptive window/level defaults
//!
//! Derives a window from the image histogram instead of requiring manual
//! tuning: the 5th..95th percentile span of the non-background population
//! becomes the window, its midpoint the center. Typical exposures land in
//! a usable display range immediately.

use raylift_core::image::histogram::histogram;
use raylift_core::{GrayImage, percentile_bounds};
use tracing::debug;

/// Percentile fractions bounding the auto window.
const LO_FRACTION: f64 = 0.05;
const HI_FRACTION: f64 = 0.95;

/// Compute an automatic (window width, window center) pair for an image.
///
/// The hard zero bin is skipped first (collimator shadow / dead detector
/// area would otherwise drag the lower percentile to 0). A degenerate
/// percentile search (flat or near-flat image) falls back to the raw
/// min/max span, and the returned width is always >= 1.
pub fn auto_window_level(image: &GrayImage) -> (i32, i32) {
    let hist = histogram(image);

    let (lo, hi) = match percentile_bounds(&hist, LO_FRACTION, HI_FRACTION, true) {
        Some(bounds) => bounds,
        None => {
            debug!("degenerate histogram, falling back to min/max span");
            image.min_max()
        }
    };

    // An odd span cannot place both bounds at center +/- width/2 with
    // integer division, so widen it by one; the window must contain the
    // whole percentile interval.
    let span = hi as i32 - lo as i32;
    let width = (span + (span & 1)).max(1);
    let center = (hi as i32 + lo as i32) / 2;
    (width, center)
}
