//! Image statistics operations
//!
//! Whole-frame and mask-restricted mean / extrema. The masked variants are
//! what the enhancement pipeline uses to measure the subject region without
//! the overexposed background skewing the estimate.

use super::GrayImage;
use crate::mask::RoiMask;

impl GrayImage {
    /// Mean sample value over the whole frame.
    pub fn mean(&self) -> f64 {
        let sum: u64 = self.samples().iter().map(|&v| v as u64).sum();
        sum as f64 / self.pixel_count() as f64
    }

    /// Mean sample value over the ON pixels of `mask`.
    ///
    /// Returns `None` if the mask has no ON pixels or its dimensions do not
    /// match the image.
    pub fn mean_in_mask(&self, mask: &RoiMask) -> Option<f64> {
        if mask.width() != self.width() || mask.height() != self.height() {
            return None;
        }
        let mut sum = 0u64;
        let mut count = 0u64;
        for (&v, &m) in self.samples().iter().zip(mask.data()) {
            if m != 0 {
                sum += v as u64;
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum as f64 / count as f64)
        }
    }

    /// Minimum and maximum sample values over the ON pixels of `mask`.
    ///
    /// Returns `None` if the mask has no ON pixels or its dimensions do not
    /// match the image.
    pub fn min_max_in_mask(&self, mask: &RoiMask) -> Option<(u16, u16)> {
        if mask.width() != self.width() || mask.height() != self.height() {
            return None;
        }
        let mut lo = u16::MAX;
        let mut hi = u16::MIN;
        let mut seen = false;
        for (&v, &m) in self.samples().iter().zip(mask.data()) {
            if m != 0 {
                lo = lo.min(v);
                hi = hi.max(v);
                seen = true;
            }
        }
        if seen { Some((lo, hi)) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::BitDepth;

    #[test]
    fn mean_over_frame() {
        let img =
            GrayImage::from_samples(2, 2, BitDepth::Eight, vec![0, 10, 20, 30]).unwrap();
        assert_eq!(img.mean(), 15.0);
    }

    #[test]
    fn masked_mean_ignores_off_pixels() {
        let img =
            GrayImage::from_samples(2, 2, BitDepth::Eight, vec![0, 10, 20, 200]).unwrap();
        let mut mask = RoiMask::all_on(2, 2);
        mask.set(1, 1, false);
        assert_eq!(img.mean_in_mask(&mask), Some(10.0));
        assert_eq!(img.min_max_in_mask(&mask), Some((0, 20)));
    }

    #[test]
    fn masked_stats_reject_mismatched_mask() {
        let img = GrayImage::new(4, 4, BitDepth::Eight).unwrap();
        let mask = RoiMask::all_on(3, 4);
        assert!(img.mean_in_mask(&mask).is_none());
    }

    #[test]
    fn empty_mask_yields_none() {
        let img = GrayImage::new(2, 2, BitDepth::Eight).unwrap();
        let mask = RoiMask::all_off(2, 2);
        assert!(img.mean_in_mask(&mask).is_none());
        assert!(img.min_max_in_mask(&mask).is_none());
    }
}
