//! Floating-point image workspace
//!
//! `FloatImage` is a 2D array of `f32` values used for intermediate
//! computations (log-domain retinex math, blur accumulation, variance maps)
//! where integer precision is insufficient.
//!
//! # Memory layout
//!
//! Data is stored in row-major order with no padding. The pixel at (x, y)
//! is at index `y * width + x`.

use crate::image::{BitDepth, GrayImage};

/// Floating-point image
#[derive(Debug, Clone)]
pub struct FloatImage {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl FloatImage {
    /// Create a zero-filled float image.
    ///
    /// Dimensions are taken on trust from the caller; all raylift callers
    /// derive them from an already-validated `GrayImage`.
    pub fn new(width: u32, height: u32) -> Self {
        FloatImage {
            width,
            height,
            data: vec![0.0f32; (width as usize) * (height as usize)],
        }
    }

    /// Convert an integer image to floating point.
    pub fn from_gray(image: &GrayImage) -> Self {
        FloatImage {
            width: image.width(),
            height: image.height(),
            data: image.samples().iter().map(|&v| v as f32).collect(),
        }
    }

    /// Quantize back to an integer image at the given depth.
    ///
    /// Values are rounded and saturated to `[0, max]`; non-finite values
    /// quantize to 0. Saturation, never wraparound.
    pub fn to_gray(&self, depth: BitDepth) -> GrayImage {
        let max = depth.max_value() as f32;
        let samples = self
            .data
            .iter()
            .map(|&v| {
                if v.is_finite() {
                    (v + 0.5).clamp(0.0, max) as u16
                } else {
                    0
                }
            })
            .collect();
        // from_samples cannot fail: length is width*height by construction
        // and every value is clamped to the depth ceiling.
        GrayImage::from_samples(self.width, self.height, depth, samples)
            .expect("quantized samples are valid by construction")
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get the value at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the value at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
    }

    /// Mean of all values.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        sum / self.data.len() as f64
    }

    /// Whether every value is finite.
    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Apply `f` to every value in place.
    pub fn map_in_place(&mut self, f: impl Fn(f32) -> f32) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }
}
