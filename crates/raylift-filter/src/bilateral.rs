//! Bilateral filtering (edge-preserving smoothing)
//!
//! A non-linear smoothing filter combining a spatial Gaussian with a range
//! (intensity) Gaussian: uniform regions are smoothed while edges are
//! preserved, because neighbors far from the center intensity get near-zero
//! weight.
//!
//! The range weights are precomputed into a 256-entry table indexed by the
//! intensity difference normalized to the sample depth, so the inner loop
//! does no transcendental math.

use crate::error::{FilterError, FilterResult};
use crate::gaussian::gaussian_kernel_1d;
use raylift_core::GrayImage;
use rayon::prelude::*;

/// Number of entries in the quantized range-weight table.
const RANGE_BINS: usize = 256;

/// Build the range kernel: weight per normalized intensity difference.
fn make_range_kernel(range_sigma: f32, max_value: u16) -> [f32; RANGE_BINS] {
    let mut kernel = [0.0f32; RANGE_BINS];
    // Normalize sigma to the table domain, floored so the center bin
    // always gets a finite nonzero weight.
    let sigma_bins =
        ((range_sigma / max_value as f32) * (RANGE_BINS - 1) as f32).max(1e-3);
    let denom = 2.0 * sigma_bins * sigma_bins;
    for (i, val) in kernel.iter_mut().enumerate() {
        *val = (-((i * i) as f32) / denom).exp();
    }
    kernel
}

/// Apply an exact bilateral filter.
///
/// # Arguments
///
/// * `image` - Input 8 or 16 bpp grayscale image
/// * `spatial_sigma` - Standard deviation of the spatial Gaussian (pixels)
/// * `range_sigma` - Standard deviation of the range Gaussian (sample units)
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if either sigma is not a
/// positive finite value.
pub fn bilateral(image: &GrayImage, spatial_sigma: f32, range_sigma: f32) -> FilterResult<GrayImage> {
    if !(spatial_sigma.is_finite() && spatial_sigma > 0.0) {
        return Err(FilterError::InvalidParameters(
            "spatial_sigma must be positive".into(),
        ));
    }
    if !(range_sigma.is_finite() && range_sigma > 0.0) {
        return Err(FilterError::InvalidParameters(
            "range_sigma must be positive".into(),
        ));
    }

    let max_value = image.depth().max_value();
    let spatial = gaussian_kernel_1d(spatial_sigma);
    let half = (spatial.len() / 2) as i32;
    let range = make_range_kernel(range_sigma, max_value);

    let w = image.width() as usize;
    let h = image.height() as usize;
    let src = image.samples();

    let mut out = image.create_template();
    out.samples_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (x, out) in out_row.iter_mut().enumerate() {
                let center = src[y * w + x] as i32;
                let mut sum = 0.0f32;
                let mut weight_sum = 0.0f32;
                for ky in -half..=half {
                    let sy = (y as i32 + ky).clamp(0, h as i32 - 1) as usize;
                    let wy = spatial[(ky + half) as usize];
                    for kx in -half..=half {
                        let sx = (x as i32 + kx).clamp(0, w as i32 - 1) as usize;
                        let neighbor = src[sy * w + sx] as i32;
                        let diff = (center - neighbor).unsigned_abs() as usize;
                        let bin =
                            diff * (RANGE_BINS - 1) / max_value as usize;
                        let weight =
                            wy * spatial[(kx + half) as usize] * range[bin.min(RANGE_BINS - 1)];
                        sum += neighbor as f32 * weight;
                        weight_sum += weight;
                    }
                }
                // weight_sum >= center's own weight > 0
                *out = ((sum / weight_sum + 0.5) as u32).min(max_value as u32) as u16;
            }
        });

    Ok(out)
}
