//! Stage 1: brightness boost
//!
//! Measures the mean intensity inside the ROI, derives a single
//! multiplicative factor toward `mean * gain` (capped below the sample
//! ceiling to avoid clipping the bulk of the distribution), and applies it
//! to ROI pixels only.

use crate::warnings::{Stage, StageWarning};
use raylift_core::{GrayImage, RoiMask};
use rayon::prelude::*;

/// Fraction of the sample ceiling the target mean may not exceed.
const TARGET_CAP: f64 = 0.95;

/// Apply the brightness boost. Returns the boosted image and the factor
/// actually applied (consumed later by thin-line protection).
pub(crate) fn brightness_boost(
    image: &GrayImage,
    mask: &RoiMask,
    gain: f32,
    max_value: u16,
) -> Result<(GrayImage, f32), StageWarning> {
    let mean = image.mean_in_mask(mask).ok_or_else(|| {
        StageWarning::DegenerateInput {
            stage: Stage::Brightness,
            detail: "empty ROI".into(),
        }
    })?;
    if mean <= 0.0 {
        return Err(StageWarning::DegenerateInput {
            stage: Stage::Brightness,
            detail: "all-zero ROI".into(),
        });
    }

    let target = (mean * gain as f64).min(TARGET_CAP * max_value as f64);
    let factor = (target / mean) as f32;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(StageWarning::NumericalFallback {
            stage: Stage::Brightness,
            detail: format!("non-finite boost factor from mean {mean}"),
        });
    }

    let w = image.width() as usize;
    let mut out = image.clone();
    out.samples_mut()
        .par_chunks_mut(w)
        .zip(mask.data().par_chunks(w))
        .for_each(|(row, mask_row)| {
            for (v, &m) in row.iter_mut().zip(mask_row) {
                if m != 0 {
                    *v = ((*v as f32 * factor + 0.5) as u32).min(max_value as u32) as u16;
                }
            }
        });

    Ok((out, factor))
}
