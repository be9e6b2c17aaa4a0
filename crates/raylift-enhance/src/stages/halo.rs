//! Stage 4: halo suppression
//!
//! Brightness and contrast boosting overshoot near strong edges, leaving
//! bright/dark fringes. This stage finds strong edges (gradient magnitude
//! above mean + 2σ), dilates them into a border band, and blends a locally
//! smoothed image into that band only, proportional to `halo_suppression`.
//! Pixels away from edges are untouched.

use crate::warnings::{Stage, StageWarning};
use raylift_core::{FloatImage, GrayImage, RoiMask};
use raylift_filter::{gaussian_blur, gradient_magnitude};
use raylift_morph::dilate_mask;

/// Half-width of the band dilation around detected edges.
const BAND_HALF: u32 = 2;
/// Sigma of the smoothing blended into the band.
const SMOOTH_SIGMA: f32 = 2.0;

pub(crate) fn suppress_halos(
    current: &GrayImage,
    halo_suppression: f32,
    max_value: u16,
) -> Result<GrayImage, StageWarning> {
    if halo_suppression <= 0.0 {
        return Ok(current.clone());
    }

    let grad = gradient_magnitude(current);
    let n = grad.data().len() as f64;
    let mean: f64 = grad.data().iter().map(|&v| v as f64).sum::<f64>() / n;
    let var: f64 = grad
        .data()
        .iter()
        .map(|&v| (v as f64 - mean) * (v as f64 - mean))
        .sum::<f64>()
        / n;
    let threshold = mean + 2.0 * var.sqrt();
    if !threshold.is_finite() {
        return Err(StageWarning::NumericalFallback {
            stage: Stage::Halo,
            detail: format!("non-finite edge threshold {threshold}"),
        });
    }
    if threshold <= 0.0 {
        // Flat image: no edges, nothing to suppress.
        return Ok(current.clone());
    }

    let mut edges = RoiMask::all_off(current.width(), current.height());
    for (m, &g) in edges.data_mut().iter_mut().zip(grad.data()) {
        if g as f64 > threshold {
            *m = 255;
        }
    }
    let band = dilate_mask(&edges, BAND_HALF);

    let smoothed = gaussian_blur(&FloatImage::from_gray(current), SMOOTH_SIGMA);
    let alpha = halo_suppression;

    let mut out = current.clone();
    for ((v, &m), &s) in out
        .samples_mut()
        .iter_mut()
        .zip(band.data())
        .zip(smoothed.data())
    {
        if m != 0 {
            let blended = (1.0 - alpha) * (*v as f32) + alpha * s;
            *v = ((blended + 0.5) as u32).min(max_value as u32) as u16;
        }
    }

    Ok(out)
}
