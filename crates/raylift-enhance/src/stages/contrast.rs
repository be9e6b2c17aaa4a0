//! Stage 3: local contrast preservation
//!
//! Brightness boosting flattens local contrast. This stage measures the
//! windowed standard deviation of the pre-boost and post-boost images and
//! adds the lost deviation back along the local detail signal:
//!
//! ```text
//! out = cur + (cur - mean_post) / max(sigma_post, 1) * (sigma_pre - sigma_post) * k
//! k   = contrast_preservation * (1 - noise_control / 2)
//! ```
//!
//! The compensation shrinks as `noise_control` grows: stronger denoising
//! tolerates less restoration before noise gets re-amplified.

use crate::warnings::{Stage, StageWarning};
use raylift_core::{FloatImage, GrayImage};
use raylift_filter::windowed_stats;

/// Half-width of the local statistics window.
const WINDOW_HALF: u32 = 3;

pub(crate) fn restore_contrast(
    pre_boost: &GrayImage,
    current: &GrayImage,
    contrast_preservation: f32,
    noise_control: f32,
) -> Result<GrayImage, StageWarning> {
    if contrast_preservation <= 0.0 {
        return Ok(current.clone());
    }

    let to_warning = |detail: String| StageWarning::NumericalFallback {
        stage: Stage::Contrast,
        detail,
    };

    let pre = FloatImage::from_gray(pre_boost);
    let cur = FloatImage::from_gray(current);
    let stats_pre = windowed_stats(&pre, WINDOW_HALF).map_err(|e| to_warning(e.to_string()))?;
    let stats_cur = windowed_stats(&cur, WINDOW_HALF).map_err(|e| to_warning(e.to_string()))?;

    let k = contrast_preservation * (1.0 - 0.5 * noise_control);

    let mut out = FloatImage::new(current.width(), current.height());
    {
        let out_data = out.data_mut();
        for (i, o) in out_data.iter_mut().enumerate() {
            let v = cur.data()[i];
            let mean_cur = stats_cur.mean.data()[i];
            let sigma_cur = stats_cur.stddev.data()[i];
            let sigma_pre = stats_pre.stddev.data()[i];
            let lost = sigma_pre - sigma_cur;
            let detail = (v - mean_cur) / sigma_cur.max(1.0);
            *o = v + detail * lost * k;
        }
    }

    if !out.all_finite() {
        return Err(to_warning("non-finite compensation".into()));
    }
    Ok(out.to_gray(current.depth()))
}
