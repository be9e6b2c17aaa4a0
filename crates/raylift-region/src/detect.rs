//! ROI detection: threshold, polarity, cleanup

use crate::otsu::otsu_threshold;
use raylift_core::image::histogram::histogram;
use raylift_core::{GrayImage, RoiMask};
use raylift_morph::{close_mask, open_mask};
use tracing::warn;

/// Which side of the threshold is the subject.
///
/// Transmission X-ray convention is that dense material absorbs radiation
/// and images dark while unobstructed background saturates bright; other
/// modalities invert this, so the polarity is a parameter rather than an
/// assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdPolarity {
    /// Pixels at or below the threshold are the subject (transmission X-ray)
    #[default]
    DarkIsSubject,
    /// Pixels above the threshold are the subject
    BrightIsSubject,
}

/// Options for ROI detection
#[derive(Debug, Clone)]
pub struct RoiOptions {
    /// Subject polarity relative to the threshold
    pub polarity: ThresholdPolarity,
    /// Half-width of the square brick used for close/open cleanup;
    /// 0 disables cleanup
    pub cleanup_half_width: u32,
}

impl Default for RoiOptions {
    fn default() -> Self {
        Self {
            polarity: ThresholdPolarity::default(),
            cleanup_half_width: 2,
        }
    }
}

/// Detect the subject region of an image.
///
/// Computes an Otsu threshold over the global histogram, binarizes with the
/// configured polarity, then applies a morphological close followed by an
/// open to fill pinholes and drop speckle.
///
/// Never fails: if no meaningful threshold exists (constant or otherwise
/// degenerate image) the whole frame is returned as subject.
pub fn detect_roi(image: &GrayImage, options: &RoiOptions) -> RoiMask {
    let hist = histogram(image);
    let Some(threshold) = otsu_threshold(&hist) else {
        warn!(
            width = image.width(),
            height = image.height(),
            "degenerate histogram, using whole frame as ROI"
        );
        return RoiMask::all_on(image.width(), image.height());
    };

    let mask = match options.polarity {
        ThresholdPolarity::DarkIsSubject => {
            RoiMask::from_predicate(image, |v| v <= threshold)
        }
        ThresholdPolarity::BrightIsSubject => {
            RoiMask::from_predicate(image, |v| v > threshold)
        }
    };

    if options.cleanup_half_width == 0 {
        return mask;
    }
    let closed = close_mask(&mask, options.cleanup_half_width);
    open_mask(&closed, options.cleanup_half_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylift_core::BitDepth;

    /// Dark square subject on a bright saturated background.
    fn synthetic_subject() -> GrayImage {
        let mut img = GrayImage::new(32, 32, BitDepth::Sixteen).unwrap();
        for s in img.samples_mut() {
            *s = 60000;
        }
        for y in 8..24 {
            for x in 8..24 {
                img.set(x, y, 5000).unwrap();
            }
        }
        img
    }

    #[test]
    fn dark_subject_is_detected() {
        let img = synthetic_subject();
        let mask = detect_roi(&img, &RoiOptions::default());
        assert!(mask.is_on(16, 16));
        assert!(!mask.is_on(0, 0));
        assert!(!mask.is_on(31, 31));
        // 16x16 subject out of 32x32 = 25% of the frame
        let frac = mask.fraction_on();
        assert!((0.15..0.35).contains(&frac), "fraction = {frac}");
    }

    #[test]
    fn polarity_flip_selects_the_background() {
        let img = synthetic_subject();
        let options = RoiOptions {
            polarity: ThresholdPolarity::BrightIsSubject,
            ..Default::default()
        };
        let mask = detect_roi(&img, &options);
        assert!(!mask.is_on(16, 16));
        assert!(mask.is_on(0, 0));
    }

    #[test]
    fn constant_image_yields_all_on_mask() {
        let img =
            GrayImage::from_samples(8, 8, BitDepth::Sixteen, vec![1234; 64]).unwrap();
        let mask = detect_roi(&img, &RoiOptions::default());
        assert_eq!(mask.on_count(), 64);
    }

    #[test]
    fn cleanup_removes_speckle_in_the_subject_map() {
        let mut img = synthetic_subject();
        // A single dark pixel far out in the background: thresholded as
        // subject, but opened away by cleanup.
        img.set(2, 29, 5000).unwrap();
        let mask = detect_roi(&img, &RoiOptions::default());
        assert!(!mask.is_on(2, 29));
        assert!(mask.is_on(16, 16));
    }
}
