//! The contrast-protected enhancement pipeline
//!
//! Runs the five sub-stages in fixed order (brightness boost, noise
//! suppression, local contrast preservation, halo suppression, thin-line
//! protection), then composites the result back over the original outside
//! the ROI (hard mask copy; interior transitions were already smoothed by
//! the halo stage).
//!
//! Stages are strictly sequential: each consumes the previous stage's
//! output. Parallelism lives inside the stages (row fan-out), never across
//! them.

use crate::error::EnhanceResult;
use crate::params::EnhanceParams;
use crate::retinex::retinex;
use crate::stages;
use crate::warnings::StageWarning;
use raylift_core::{GrayImage, RoiMask};
use raylift_region::{RoiOptions, detect_roi};
use tracing::warn;

/// Result of an enhancement run: the image plus every stage degradation
/// that occurred along the way.
#[derive(Debug, Clone)]
pub struct EnhanceOutcome {
    /// Enhanced image, same dimensions and depth as the input
    pub image: GrayImage,
    /// Recoverable degradations, in stage order; empty on a clean run
    pub warnings: Vec<StageWarning>,
}

/// Copy `original` samples over `enhanced` wherever the mask is OFF.
///
/// This is the hard outer-boundary composite: outside-ROI pixels of the
/// result are bit-identical to the original.
pub fn composite_outside(
    original: &GrayImage,
    enhanced: &GrayImage,
    mask: &RoiMask,
) -> GrayImage {
    debug_assert!(original.sizes_equal(enhanced));
    let mut out = enhanced.clone();
    for ((v, &orig), &m) in out
        .samples_mut()
        .iter_mut()
        .zip(original.samples())
        .zip(mask.data())
    {
        if m == 0 {
            *v = orig;
        }
    }
    out
}

/// Run the five-stage contrast-protected enhancer over the ROI.
///
/// Never fails for a well-formed image/mask pair; the only hard error is a
/// mask whose dimensions do not match the image. Every internal numerical
/// edge case degrades the affected stage to identity and is reported in
/// [`EnhanceOutcome::warnings`].
pub fn enhance(
    image: &GrayImage,
    mask: &RoiMask,
    params: &EnhanceParams,
) -> EnhanceResult<EnhanceOutcome> {
    mask.check_matches(image)?;
    let params = params.validated();
    let max_value = image.depth().max_value();

    let mut warnings = Vec::new();
    let pre_boost = image.clone();
    let mut current = image.clone();
    let mut boost_factor = 1.0f32;

    let note = |w: StageWarning, warnings: &mut Vec<StageWarning>| {
        warn!(stage = %w.stage(), warning = %w, "enhancement stage degraded to identity");
        warnings.push(w);
    };

    // 1. Brightness boost
    match stages::brightness_boost(&current, mask, params.brightness_gain, max_value) {
        Ok((img, factor)) => {
            current = img;
            boost_factor = factor;
        }
        Err(w) => note(w, &mut warnings),
    }

    // 2. Noise suppression (exact no-op at zero)
    if params.noise_control > 0.0 {
        match stages::suppress_noise(&current, params.noise_control, max_value) {
            Ok(img) => current = img,
            Err(w) => note(w, &mut warnings),
        }
    }

    // 3. Local contrast preservation
    match stages::restore_contrast(
        &pre_boost,
        &current,
        params.contrast_preservation,
        params.noise_control,
    ) {
        Ok(img) => current = img,
        Err(w) => note(w, &mut warnings),
    }

    // 4. Halo suppression
    match stages::suppress_halos(&current, params.halo_suppression, max_value) {
        Ok(img) => current = img,
        Err(w) => note(w, &mut warnings),
    }

    // 5. Thin-line protection (last, so halo blending cannot overwrite it)
    match stages::protect_thin_lines(&current, &pre_boost, mask, boost_factor, max_value) {
        Ok(img) => current = img,
        Err(w) => note(w, &mut warnings),
    }

    Ok(EnhanceOutcome {
        image: composite_outside(image, &current, mask),
        warnings,
    })
}

/// Full enhancement chain as an interactive viewer calls it:
/// ROI detection → retinex decomposition → contrast-protected enhancer,
/// composited back over the original outside the detected ROI.
pub fn enhance_with_roi(
    image: &GrayImage,
    params: &EnhanceParams,
    roi_options: &RoiOptions,
) -> EnhanceResult<EnhanceOutcome> {
    let params = params.validated();
    let mask = detect_roi(image, roi_options);

    let (decomposed, retinex_warning) = retinex(
        image,
        params.retinex_strength,
        &params.scales,
        &params.weights,
    );

    let mut outcome = enhance(&decomposed, &mask, &params)?;
    outcome.image = composite_outside(image, &outcome.image, &mask);
    if let Some(w) = retinex_warning {
        outcome.warnings.insert(0, w);
    }
    Ok(outcome)
}
