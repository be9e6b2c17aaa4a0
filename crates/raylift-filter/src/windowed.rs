//! Windowed statistics using integral images
//!
//! Computes local mean and standard deviation over square sliding windows in
//! O(1) per pixel using summed-area tables. Accumulators are `f64`: sums of
//! squared 16-bit samples overflow the 24-bit mantissa of `f32` long before
//! they overflow `f64`.

use crate::error::{FilterError, FilterResult};
use raylift_core::FloatImage;

/// Local mean and standard deviation maps over a sliding window.
pub struct WindowedStats {
    /// Windowed mean
    pub mean: FloatImage,
    /// Windowed standard deviation
    pub stddev: FloatImage,
}

/// Summed-area tables of values and squared values, sized (w+1)×(h+1) so a
/// window sum is four lookups with no edge special-casing.
struct Integrals {
    sum: Vec<f64>,
    sum_sq: Vec<f64>,
    stride: usize,
}

fn build_integrals(src: &FloatImage) -> Integrals {
    let w = src.width() as usize;
    let h = src.height() as usize;
    let stride = w + 1;
    let mut sum = vec![0.0f64; stride * (h + 1)];
    let mut sum_sq = vec![0.0f64; stride * (h + 1)];
    let data = src.data();
    for y in 0..h {
        let mut row_sum = 0.0f64;
        let mut row_sum_sq = 0.0f64;
        for x in 0..w {
            let v = data[y * w + x] as f64;
            row_sum += v;
            row_sum_sq += v * v;
            let idx = (y + 1) * stride + (x + 1);
            sum[idx] = sum[y * stride + (x + 1)] + row_sum;
            sum_sq[idx] = sum_sq[y * stride + (x + 1)] + row_sum_sq;
        }
    }
    Integrals {
        sum,
        sum_sq,
        stride,
    }
}

impl Integrals {
    /// Sum over the half-open rectangle [x0, x1) × [y0, y1).
    #[inline]
    fn rect(&self, table: &[f64], x0: usize, y0: usize, x1: usize, y1: usize) -> f64 {
        table[y1 * self.stride + x1] - table[y0 * self.stride + x1]
            - table[y1 * self.stride + x0]
            + table[y0 * self.stride + x0]
    }
}

/// Compute windowed mean and standard deviation maps.
///
/// The window at each pixel is the `(2*half + 1)`-square centered there,
/// intersected with the image rectangle (shrinking windows at borders, so
/// border statistics use only real pixels).
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `half == 0`.
pub fn windowed_stats(src: &FloatImage, half: u32) -> FilterResult<WindowedStats> {
    if half == 0 {
        return Err(FilterError::InvalidParameters(
            "window half-width must be >= 1".into(),
        ));
    }

    let w = src.width() as usize;
    let h = src.height() as usize;
    let half = half as usize;
    let integrals = build_integrals(src);

    let mut mean = FloatImage::new(src.width(), src.height());
    let mut stddev = FloatImage::new(src.width(), src.height());
    let mean_data = mean.data_mut();
    let std_data = stddev.data_mut();

    for y in 0..h {
        let y0 = y.saturating_sub(half);
        let y1 = (y + half + 1).min(h);
        for x in 0..w {
            let x0 = x.saturating_sub(half);
            let x1 = (x + half + 1).min(w);
            let count = ((x1 - x0) * (y1 - y0)) as f64;
            let s = integrals.rect(&integrals.sum, x0, y0, x1, y1);
            let s2 = integrals.rect(&integrals.sum_sq, x0, y0, x1, y1);
            let m = s / count;
            let var = (s2 / count - m * m).max(0.0);
            mean_data[y * w + x] = m as f32;
            std_data[y * w + x] = var.sqrt() as f32;
        }
    }

    Ok(WindowedStats { mean, stddev })
}
