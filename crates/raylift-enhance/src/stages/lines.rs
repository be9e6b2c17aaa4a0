//! Stage 5: thin-line protection
//!
//! Near-1-pixel-wide linear structures (hairline cracks, wires) are exactly
//! what the viewer must not lose, and the full brightness boost tends to
//! blow them out against their background. Directional grayscale openings
//! with long 1-wide bricks erase thin bright structures; the residual
//! (original minus opened), thresholded and ORed across both orientations,
//! marks them. Inside that sub-mask a gentler brightness formula replaces
//! the stage-1 result, computed from the pre-boost samples.
//!
//! Runs last so the halo-suppression blend cannot overwrite it.

use crate::warnings::{Stage, StageWarning};
use raylift_core::{GrayImage, RoiMask};
use raylift_morph::open_gray;

/// Length of the directional structuring elements.
const LINE_SE_LENGTH: u32 = 9;
/// Residual threshold as a fraction of the sample ceiling.
const RESIDUAL_FRACTION: f32 = 0.02;
/// How much of the boost the protected pixels receive.
const GENTLE_FRACTION: f32 = 0.5;

pub(crate) fn protect_thin_lines(
    current: &GrayImage,
    pre_boost: &GrayImage,
    roi: &RoiMask,
    boost_factor: f32,
    max_value: u16,
) -> Result<GrayImage, StageWarning> {
    if !boost_factor.is_finite() || boost_factor <= 0.0 {
        return Err(StageWarning::NumericalFallback {
            stage: Stage::ThinLines,
            detail: format!("unusable boost factor {boost_factor}"),
        });
    }

    // Horizontal brick erases thin vertical structures and vice versa;
    // the two residuals together cover both orientations.
    let opened_h = open_gray(current, LINE_SE_LENGTH, 1);
    let opened_v = open_gray(current, 1, LINE_SE_LENGTH);

    let threshold = (RESIDUAL_FRACTION * max_value as f32) as u16;
    let gentle = 1.0 + (boost_factor - 1.0) * GENTLE_FRACTION;

    let mut out = current.clone();
    let src = current.samples();
    let pre = pre_boost.samples();
    let oh = opened_h.samples();
    let ov = opened_v.samples();
    let roi_data = roi.data();
    let out_samples = out.samples_mut();

    let mut protected = 0usize;
    for i in 0..src.len() {
        if roi_data[i] == 0 {
            continue;
        }
        let residual_h = src[i].saturating_sub(oh[i]);
        let residual_v = src[i].saturating_sub(ov[i]);
        if residual_h > threshold || residual_v > threshold {
            out_samples[i] =
                ((pre[i] as f32 * gentle + 0.5) as u32).min(max_value as u32) as u16;
            protected += 1;
        }
    }
    tracing::debug!(protected, "thin-line protection applied");

    Ok(out)
}
