//! The cached window/level LUT engine

use crate::auto::auto_window_level;
use raylift_core::{BitDepth, GrayImage};
use rayon::prelude::*;

/// Window/level mapping engine for one viewed image.
///
/// Owns the source buffer, the lookup table, and the reusable display
/// buffer. The LUT is valid iff `(last_width, last_center)` equals the
/// requested `(width, center)`; [`WindowLevel::display_image`] rebuilds it
/// only on a mismatch, which is the engine's core performance contract.
///
/// One engine instance belongs to one viewed image. The engine does not
/// lock: `display_image` takes `&mut self`, so concurrent use of a single
/// instance is rejected at compile time, while engines for different
/// images are fully independent.
#[derive(Debug, Clone)]
pub struct WindowLevel {
    source: GrayImage,
    width: i32,
    center: i32,
    lut: Vec<u8>,
    last_width: i32,
    last_center: i32,
    display: GrayImage,
    rebuild_count: u64,
}

impl WindowLevel {
    /// Create an engine with an explicit window.
    ///
    /// `width` is floored to 1.
    pub fn new(source: GrayImage, width: i32, center: i32) -> Self {
        let display = GrayImage::new(source.width(), source.height(), BitDepth::Eight)
            .expect("source dimensions are already validated");
        WindowLevel {
            source,
            width: width.max(1),
            center,
            lut: Vec::new(),
            // Sentinel that can never equal a clamped width, so the first
            // display_image call always builds the LUT.
            last_width: 0,
            last_center: 0,
            display,
            rebuild_count: 0,
        }
    }

    /// Create an engine windowed automatically from the image histogram.
    pub fn with_auto_window(source: GrayImage) -> Self {
        let (width, center) = auto_window_level(&source);
        Self::new(source, width, center)
    }

    /// Current window width (always >= 1).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Current window center.
    #[inline]
    pub fn center(&self) -> i32 {
        self.center
    }

    /// The viewed source image.
    #[inline]
    pub fn source(&self) -> &GrayImage {
        &self.source
    }

    /// How many times the LUT has been rebuilt. Instrumentation for the
    /// cache contract: identical consecutive parameters must not bump it.
    #[inline]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Set the window parameters. `width` is floored to 1. Cheap: the LUT
    /// is rebuilt lazily on the next [`WindowLevel::display_image`].
    pub fn set_window(&mut self, width: i32, center: i32) {
        self.width = width.max(1);
        self.center = center;
    }

    /// Map the source into the cached 8-bit display buffer and return it.
    ///
    /// Rebuilds the LUT only when the window parameters changed since the
    /// last call; otherwise this is a single branch-free table-lookup scan
    /// over the samples, fanned out across rows.
    pub fn display_image(&mut self) -> &GrayImage {
        if self.width != self.last_width || self.center != self.last_center {
            self.recompute_lut();
            self.last_width = self.width;
            self.last_center = self.center;
        }

        let lut = &self.lut;
        let w = self.source.width() as usize;
        let src = self.source.samples();
        self.display
            .samples_mut()
            .par_chunks_mut(w)
            .zip(src.par_chunks(w))
            .for_each(|(dst_row, src_row)| {
                for (d, &s) in dst_row.iter_mut().zip(src_row) {
                    *d = lut[s as usize] as u16;
                }
            });

        &self.display
    }

    /// Build the lookup table for the current (width, center).
    ///
    /// For sample `i`: 0 at or below `center - width/2`, 255 at or above
    /// `center + width/2`, linear in between. Integer math throughout;
    /// monotonic non-decreasing by construction.
    fn recompute_lut(&mut self) {
        let domain = self.source.depth().domain_len();
        let width = self.width as i64; // >= 1 by set_window/new
        let min = self.center as i64 - width / 2;
        let max = self.center as i64 + width / 2;

        self.lut.clear();
        self.lut.reserve(domain);
        for i in 0..domain as i64 {
            let v = if i <= min {
                0
            } else if i >= max {
                255
            } else {
                ((i - min) * 255 / width) as u8
            };
            self.lut.push(v);
        }
        self.rebuild_count += 1;
        tracing::debug!(
            width = self.width,
            center = self.center,
            rebuilds = self.rebuild_count,
            "window/level LUT rebuilt"
        );
    }
}
