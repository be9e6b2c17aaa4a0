//! Multi-scale retinex decomposition
//!
//! Separates an image into an illumination estimate (multi-scale Gaussian
//! blur) and a reflectance/detail signal in the log domain:
//!
//! ```text
//! R = sum_i  w_i * (log(I + 1) - log(blur_i(I + 1)))
//! out = exp(strength * R), rescaled so mean(out) == mean(I)
//! ```
//!
//! Small scales capture fine detail, large scales the global illumination
//! trend. The transform is contrast-shaping, not brightness-shaping: the
//! final mean rescale pins the output mean to the input mean.
//!
//! All intermediate math is f32; the result is quantized back to the source
//! bit depth with saturation. Any non-finite intermediate makes the stage
//! return a clone of the input plus a warning: best effort, never fatal.

use crate::warnings::{Stage, StageWarning};
use raylift_core::{FloatImage, GrayImage};
use raylift_filter::gaussian_blur;
use tracing::warn;

/// Run the multi-scale retinex decomposition.
///
/// `scales` are Gaussian standard deviations; `weights` must be the same
/// length (callers go through
/// [`EnhanceParams::validated`](crate::EnhanceParams::validated), which
/// guarantees this). `strength` scales the accumulated reflectance before
/// returning to the linear domain.
///
/// Returns the enhanced image and, when a numerical degeneracy forced an
/// identity fallback, the warning describing it.
pub fn retinex(
    image: &GrayImage,
    strength: f32,
    scales: &[f32],
    weights: &[f32],
) -> (GrayImage, Option<StageWarning>) {
    debug_assert_eq!(scales.len(), weights.len());

    let fallback = |detail: String| {
        warn!(detail = detail.as_str(), "retinex fell back to identity");
        (
            image.clone(),
            Some(StageWarning::NumericalFallback {
                stage: Stage::Retinex,
                detail,
            }),
        )
    };

    if scales.is_empty() {
        return fallback("no scales configured".into());
    }

    // Offset by +1 so log(0) never occurs; a normalized blur of a >= 1
    // signal stays >= 1, keeping every log argument positive.
    let mut offset = FloatImage::from_gray(image);
    offset.map_in_place(|v| v + 1.0);

    let log_signal: Vec<f32> = offset.data().iter().map(|&v| v.ln()).collect();

    let mut reflectance = vec![0.0f32; log_signal.len()];
    for (&scale, &weight) in scales.iter().zip(weights) {
        let blurred = gaussian_blur(&offset, scale);
        for ((acc, &ls), &b) in reflectance
            .iter_mut()
            .zip(&log_signal)
            .zip(blurred.data())
        {
            *acc += weight * (ls - b.ln());
        }
    }

    let mut out = FloatImage::new(image.width(), image.height());
    for (o, &r) in out.data_mut().iter_mut().zip(&reflectance) {
        *o = (strength * r).exp();
    }

    if !out.all_finite() {
        return fallback("non-finite reflectance".into());
    }

    // Brightness-preserving rescale.
    let in_mean = FloatImage::from_gray(image).mean();
    let out_mean = out.mean();
    if !out_mean.is_finite() || out_mean <= f64::EPSILON {
        return fallback(format!("degenerate output mean {out_mean}"));
    }
    let ratio = (in_mean / out_mean) as f32;
    out.map_in_place(|v| v * ratio);

    (out.to_gray(image.depth()), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylift_core::BitDepth;

    fn gradient_image() -> GrayImage {
        let mut img = GrayImage::new(24, 24, BitDepth::Sixteen).unwrap();
        for y in 0..24 {
            for x in 0..24 {
                img.set(x, y, (1000 + x * 800 + y * 400) as u16).unwrap();
            }
        }
        img
    }

    #[test]
    fn zero_strength_preserves_mean() {
        let img = gradient_image();
        let (out, warning) = retinex(&img, 0.0, &[2.0, 8.0], &[0.5, 0.5]);
        assert!(warning.is_none());
        assert!(out.sizes_equal(&img));
        let tolerance = img.mean() * 0.01 + 1.0;
        assert!(
            (out.mean() - img.mean()).abs() < tolerance,
            "in {} out {}",
            img.mean(),
            out.mean()
        );
    }

    #[test]
    fn positive_strength_preserves_mean_too() {
        let img = gradient_image();
        let (out, warning) = retinex(&img, 1.0, &[2.0, 8.0], &[0.5, 0.5]);
        assert!(warning.is_none());
        let tolerance = img.mean() * 0.02 + 1.0;
        assert!((out.mean() - img.mean()).abs() < tolerance);
    }

    #[test]
    fn flat_image_does_not_warn_or_crash() {
        let img =
            GrayImage::from_samples(16, 16, BitDepth::Sixteen, vec![20000; 256]).unwrap();
        let (out, warning) = retinex(&img, 0.8, &[2.0], &[1.0]);
        assert!(warning.is_none());
        assert!(out.sizes_equal(&img));
        // Flat in, flat out at the same level.
        let tolerance = 20000.0 * 0.01;
        assert!((out.mean() - 20000.0).abs() < tolerance);
    }

    #[test]
    fn empty_scales_fall_back_with_warning() {
        let img = gradient_image();
        let (out, warning) = retinex(&img, 0.5, &[], &[]);
        assert_eq!(out.samples(), img.samples());
        assert!(matches!(
            warning,
            Some(StageWarning::NumericalFallback { stage: Stage::Retinex, .. })
        ));
    }

    #[test]
    fn output_depth_matches_input() {
        let img = GrayImage::from_samples(
            8,
            8,
            BitDepth::Eight,
            (0..64).map(|i| (i * 4) as u16).collect(),
        )
        .unwrap();
        let (out, _) = retinex(&img, 0.7, &[1.5], &[1.0]);
        assert_eq!(out.depth(), BitDepth::Eight);
    }
}
