//! Grayscale image container
//!
//! [`GrayImage`] is the fundamental image type in raylift. It stores one
//! unsigned sample per pixel in row-major order with no padding; the pixel
//! at (x, y) is at index `y * width + x`. A 16-bit container holds the full
//! 0..=65535 range, an 8-bit container holds 0..=255 (still stored as `u16`
//! so every algorithm handles both depths with one code path).
//!
//! # Ownership model
//!
//! Images produced by a raylift stage are exclusively owned by the caller of
//! that stage. No stage mutates its input in place; every transform returns
//! a new buffer, preserving the original for comparison or undo.

pub mod histogram;
pub mod statistics;

use crate::error::{Error, Result};

/// Sample depth (bits per pixel)
///
/// raylift supports 8-bit and 16-bit unsigned single-channel samples only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BitDepth {
    /// 8-bit grayscale
    Eight = 8,
    /// 16-bit grayscale
    Sixteen = 16,
}

impl BitDepth {
    /// Create `BitDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 8 or 16.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Get the number of bits per pixel.
    #[inline]
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum sample value representable at this depth.
    #[inline]
    pub fn max_value(self) -> u16 {
        match self {
            BitDepth::Eight => u8::MAX as u16,
            BitDepth::Sixteen => u16::MAX,
        }
    }

    /// Size of the full sample domain (number of possible values).
    ///
    /// This is the length of any lookup table covering the depth: 256 for
    /// 8 bpp, 65536 for 16 bpp.
    #[inline]
    pub fn domain_len(self) -> usize {
        self.max_value() as usize + 1
    }
}

/// Grayscale image
///
/// # Examples
///
/// ```
/// use raylift_core::{BitDepth, GrayImage};
///
/// let img = GrayImage::new(640, 480, BitDepth::Sixteen).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.get(0, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Sample depth
    depth: BitDepth,
    /// Sample data (row-major, no padding)
    samples: Vec<u16>,
}

impl GrayImage {
    /// Create a new image with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: BitDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(GrayImage {
            width,
            height,
            depth,
            samples: vec![0u16; size],
        })
    }

    /// Create an image from an existing sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions,
    /// [`Error::BadSampleCount`] if `samples.len() != width * height`, and
    /// [`Error::SampleOutOfRange`] if an 8-bit image contains a sample
    /// above 255.
    pub fn from_samples(
        width: u32,
        height: u32,
        depth: BitDepth,
        samples: Vec<u16>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if samples.len() != expected {
            return Err(Error::BadSampleCount {
                expected,
                actual: samples.len(),
            });
        }
        if depth == BitDepth::Eight
            && let Some(&value) = samples.iter().find(|&&v| v > u8::MAX as u16)
        {
            return Err(Error::SampleOutOfRange {
                value,
                depth: depth.bits(),
            });
        }
        Ok(GrayImage {
            width,
            height,
            depth,
            samples,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the sample depth.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.samples.len()
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Get mutable access to the sample data.
    ///
    /// Callers must keep samples within the depth ceiling.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u16] {
        &mut self.samples
    }

    /// Get a sample value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get a sample value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u16 {
        self.samples[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set a sample value at (x, y), saturating to the depth ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: u16) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.samples.len(),
            });
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.samples[idx] = value.min(self.depth.max_value());
        Ok(())
    }

    /// Get a single row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u16] {
        let start = (y as usize) * (self.width as usize);
        &self.samples[start..start + self.width as usize]
    }

    /// Create a new zero-filled image with the same dimensions and depth.
    pub fn create_template(&self) -> Self {
        GrayImage {
            width: self.width,
            height: self.height,
            depth: self.depth,
            samples: vec![0u16; self.samples.len()],
        }
    }

    /// Check if two images have the same width, height, and depth.
    pub fn sizes_equal(&self, other: &GrayImage) -> bool {
        self.width == other.width && self.height == other.height && self.depth == other.depth
    }

    /// Minimum and maximum sample values.
    pub fn min_max(&self) -> (u16, u16) {
        let mut lo = u16::MAX;
        let mut hi = u16::MIN;
        for &v in &self.samples {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        (lo, hi)
    }

    /// Requantize to an 8-bit image by linearly mapping the full source
    /// domain onto 0..=255.
    ///
    /// An 8-bit source is returned as a clone. This is the naive
    /// full-range conversion; for content-adaptive mapping use the
    /// window/level engine.
    pub fn to_eight_bit(&self) -> Self {
        if self.depth == BitDepth::Eight {
            return self.clone();
        }
        let samples = self
            .samples
            .iter()
            .map(|&v| ((v as u32 * 255 + 32767) / 65535) as u16)
            .collect();
        GrayImage {
            width: self.width,
            height: self.height,
            depth: BitDepth::Eight,
            samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(GrayImage::new(0, 10, BitDepth::Eight).is_err());
        assert!(GrayImage::new(10, 0, BitDepth::Sixteen).is_err());
    }

    #[test]
    fn from_samples_checks_length_and_range() {
        let err = GrayImage::from_samples(4, 4, BitDepth::Eight, vec![0; 15]);
        assert!(matches!(err, Err(Error::BadSampleCount { .. })));

        let err = GrayImage::from_samples(2, 2, BitDepth::Eight, vec![0, 1, 2, 300]);
        assert!(matches!(err, Err(Error::SampleOutOfRange { .. })));

        let ok = GrayImage::from_samples(2, 2, BitDepth::Sixteen, vec![0, 1, 2, 65535]);
        assert!(ok.is_ok());
    }

    #[test]
    fn get_set_roundtrip_with_bounds() {
        let mut img = GrayImage::new(3, 2, BitDepth::Sixteen).unwrap();
        img.set(2, 1, 40000).unwrap();
        assert_eq!(img.get(2, 1), Some(40000));
        assert_eq!(img.get(3, 1), None);
        assert!(img.set(0, 2, 1).is_err());
    }

    #[test]
    fn set_saturates_to_depth_ceiling() {
        let mut img = GrayImage::new(2, 2, BitDepth::Eight).unwrap();
        img.set(0, 0, 999).unwrap();
        assert_eq!(img.get(0, 0), Some(255));
    }

    #[test]
    fn to_eight_bit_maps_endpoints() {
        let img =
            GrayImage::from_samples(2, 1, BitDepth::Sixteen, vec![0, 65535]).unwrap();
        let out = img.to_eight_bit();
        assert_eq!(out.depth(), BitDepth::Eight);
        assert_eq!(out.samples(), &[0, 255]);
    }
}
