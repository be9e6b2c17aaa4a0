//! Binary region-of-interest mask
//!
//! [`RoiMask`] marks the "subject" region of an image (ON, stored as 255)
//! against background / overexposed area (OFF, stored as 0). A mask is
//! produced fresh per enhancement call and always matches the dimensions of
//! the image it was derived from.

use crate::error::{Error, Result};
use crate::image::GrayImage;

/// Mask byte for an ON pixel.
pub const ON: u8 = 255;
/// Mask byte for an OFF pixel.
pub const OFF: u8 = 0;

/// Binary mask with one byte per pixel (0 or 255), row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RoiMask {
    /// Create a mask with every pixel ON.
    pub fn all_on(width: u32, height: u32) -> Self {
        RoiMask {
            width,
            height,
            data: vec![ON; (width as usize) * (height as usize)],
        }
    }

    /// Create a mask with every pixel OFF.
    pub fn all_off(width: u32, height: u32) -> Self {
        RoiMask {
            width,
            height,
            data: vec![OFF; (width as usize) * (height as usize)],
        }
    }

    /// Build a mask by applying a predicate to every sample of an image.
    pub fn from_predicate(image: &GrayImage, mut on: impl FnMut(u16) -> bool) -> Self {
        let data = image
            .samples()
            .iter()
            .map(|&v| if on(v) { ON } else { OFF })
            .collect();
        RoiMask {
            width: image.width(),
            height: image.height(),
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw mask bytes (0 or 255), row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw mask bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Whether the pixel at (x, y) is ON.
    ///
    /// Out-of-bounds coordinates read as OFF.
    #[inline]
    pub fn is_on(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[(y as usize) * (self.width as usize) + (x as usize)] != 0
    }

    /// Set the pixel at (x, y). Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = if on { ON } else { OFF };
    }

    /// Number of ON pixels.
    pub fn on_count(&self) -> usize {
        self.data.iter().filter(|&&m| m != 0).count()
    }

    /// Fraction of ON pixels in [0, 1].
    pub fn fraction_on(&self) -> f64 {
        self.on_count() as f64 / self.data.len() as f64
    }

    /// Invert the mask in place.
    pub fn invert(&mut self) {
        for m in &mut self.data {
            *m = if *m == 0 { ON } else { OFF };
        }
    }

    /// Check that this mask matches the dimensions of `image`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on any difference.
    pub fn check_matches(&self, image: &GrayImage) -> Result<()> {
        if self.width != image.width() || self.height != image.height() {
            return Err(Error::DimensionMismatch {
                expected: (image.width(), image.height()),
                actual: (self.width, self.height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::BitDepth;

    #[test]
    fn predicate_mask_and_counts() {
        let img =
            GrayImage::from_samples(2, 2, BitDepth::Eight, vec![10, 200, 30, 240]).unwrap();
        let mask = RoiMask::from_predicate(&img, |v| v < 100);
        assert!(mask.is_on(0, 0));
        assert!(!mask.is_on(1, 0));
        assert_eq!(mask.on_count(), 2);
        assert_eq!(mask.fraction_on(), 0.5);
    }

    #[test]
    fn out_of_bounds_reads_off() {
        let mask = RoiMask::all_on(2, 2);
        assert!(!mask.is_on(2, 0));
        assert!(!mask.is_on(0, 5));
    }

    #[test]
    fn invert_flips_every_pixel() {
        let mut mask = RoiMask::all_off(3, 1);
        mask.set(1, 0, true);
        mask.invert();
        assert!(mask.is_on(0, 0));
        assert!(!mask.is_on(1, 0));
    }

    #[test]
    fn dimension_check() {
        let img = GrayImage::new(4, 3, BitDepth::Sixteen).unwrap();
        assert!(RoiMask::all_on(4, 3).check_matches(&img).is_ok());
        assert!(RoiMask::all_on(3, 4).check_matches(&img).is_err());
    }
}
