//! Stage 2: noise suppression
//!
//! Edge-preserving bilateral smoothing at an intensity proportional to
//! `noise_control`. At 0 the stage is an exact no-op (the pipeline skips
//! it entirely, so not even quantization touches the samples).

use crate::warnings::{Stage, StageWarning};
use raylift_core::GrayImage;
use raylift_filter::bilateral;

/// Spatial extent of the smoothing, in pixels.
const SPATIAL_SIGMA: f32 = 1.5;
/// Range sigma at `noise_control == 1`, as a fraction of the sample ceiling.
const MAX_RANGE_FRACTION: f32 = 0.1;

pub(crate) fn suppress_noise(
    image: &GrayImage,
    noise_control: f32,
    max_value: u16,
) -> Result<GrayImage, StageWarning> {
    debug_assert!(noise_control > 0.0);
    let range_sigma = noise_control * MAX_RANGE_FRACTION * max_value as f32;
    bilateral(image, SPATIAL_SIGMA, range_sigma).map_err(|e| StageWarning::NumericalFallback {
        stage: Stage::Noise,
        detail: e.to_string(),
    })
}
