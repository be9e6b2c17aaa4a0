//! Separable Gaussian blur
//!
//! Two-pass separable convolution over a [`FloatImage`] with replicated
//! borders. Each pass parallelizes over output rows; rows are independent,
//! so the fan-out needs no synchronization beyond the join.

use raylift_core::FloatImage;
use rayon::prelude::*;

/// Build a normalized 1D Gaussian kernel for the given standard deviation.
///
/// The half-width is `ceil(3 * sigma)`, covering ~99.7% of the mass.
/// `sigma` is floored to a small positive value so a degenerate request
/// still yields a valid (near-identity) kernel.
pub fn gaussian_kernel_1d(sigma: f32) -> Vec<f32> {
    let sigma = sigma.max(1e-3);
    let half = (3.0 * sigma).ceil() as i32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel = Vec::with_capacity((2 * half + 1) as usize);
    for i in -half..=half {
        kernel.push((-((i * i) as f32) / denom).exp());
    }
    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Gaussian-blur a float image with standard deviation `sigma`.
///
/// Borders are replicated (coordinates clamped to the image rectangle).
pub fn gaussian_blur(src: &FloatImage, sigma: f32) -> FloatImage {
    let kernel = gaussian_kernel_1d(sigma);
    let half = (kernel.len() / 2) as i32;
    let w = src.width() as usize;
    let h = src.height() as usize;

    // Horizontal pass
    let mut tmp = FloatImage::new(src.width(), src.height());
    tmp.data_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| {
            let src_row = &src.data()[y * w..(y + 1) * w];
            for (x, out) in out_row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for (k, &weight) in kernel.iter().enumerate() {
                    let sx = (x as i32 + k as i32 - half).clamp(0, w as i32 - 1) as usize;
                    acc += weight * src_row[sx];
                }
                *out = acc;
            }
        });

    // Vertical pass
    let mut out = FloatImage::new(src.width(), src.height());
    let tmp_data = tmp.data();
    out.data_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (x, out) in out_row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for (k, &weight) in kernel.iter().enumerate() {
                    let sy = (y as i32 + k as i32 - half).clamp(0, h as i32 - 1) as usize;
                    acc += weight * tmp_data[sy * w + x];
                }
                *out = acc;
            }
        });

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let k = gaussian_kernel_1d(2.0);
        assert_eq!(k.len() % 2, 1);
        let sum: f32 = k.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        for i in 0..k.len() / 2 {
            assert!((k[i] - k[k.len() - 1 - i]).abs() < 1e-6);
        }
    }

    #[test]
    fn blur_preserves_constant_image() {
        let mut img = FloatImage::new(16, 16);
        img.map_in_place(|_| 42.0);
        let out = gaussian_blur(&img, 3.0);
        for &v in out.data() {
            assert!((v - 42.0).abs() < 1e-3);
        }
    }

    #[test]
    fn blur_preserves_mean_approximately() {
        let mut img = FloatImage::new(32, 32);
        for y in 0..32 {
            for x in 0..32 {
                img.set(x, y, ((x * 7 + y * 13) % 100) as f32);
            }
        }
        let out = gaussian_blur(&img, 1.5);
        // Replicated borders keep the mean close to the input mean.
        assert!((out.mean() - img.mean()).abs() < 2.0);
    }

    #[test]
    fn blur_spreads_an_impulse() {
        let mut img = FloatImage::new(11, 11);
        img.set(5, 5, 100.0);
        let out = gaussian_blur(&img, 1.0);
        assert!(out.get(5, 5) < 100.0);
        assert!(out.get(4, 5) > 0.0);
        assert!(out.get(5, 4) > 0.0);
    }
}
