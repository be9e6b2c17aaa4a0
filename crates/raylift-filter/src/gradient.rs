//! Gradient magnitude (Sobel)
//!
//! Produces a float edge-strength map from the 3×3 Sobel pair. Borders are
//! replicated. Used by the halo-suppression stage to find the strong edges
//! that contrast boosting overshoots around.

use raylift_core::{FloatImage, GrayImage};
use rayon::prelude::*;

/// Compute the Sobel gradient magnitude of a grayscale image.
pub fn gradient_magnitude(image: &GrayImage) -> FloatImage {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let src = image.samples();

    let at = |x: i32, y: i32| -> f32 {
        let x = x.clamp(0, w as i32 - 1) as usize;
        let y = y.clamp(0, h as i32 - 1) as usize;
        src[y * w + x] as f32
    };

    let mut out = FloatImage::new(image.width(), image.height());
    out.data_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| {
            let y = y as i32;
            for (x, out) in out_row.iter_mut().enumerate() {
                let x = x as i32;
                let gx = at(x + 1, y - 1) + 2.0 * at(x + 1, y) + at(x + 1, y + 1)
                    - at(x - 1, y - 1)
                    - 2.0 * at(x - 1, y)
                    - at(x - 1, y + 1);
                let gy = at(x - 1, y + 1) + 2.0 * at(x, y + 1) + at(x + 1, y + 1)
                    - at(x - 1, y - 1)
                    - 2.0 * at(x, y - 1)
                    - at(x + 1, y - 1);
                *out = (gx * gx + gy * gy).sqrt();
            }
        });

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylift_core::BitDepth;

    #[test]
    fn flat_image_has_zero_gradient() {
        let img =
            GrayImage::from_samples(6, 6, BitDepth::Sixteen, vec![12345; 36]).unwrap();
        let grad = gradient_magnitude(&img);
        assert!(grad.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn vertical_step_peaks_at_the_edge() {
        let w = 8u32;
        let mut samples = vec![0u16; 64];
        for y in 0..8 {
            for x in 4..8 {
                samples[(y * w + x) as usize] = 1000;
            }
        }
        let img = GrayImage::from_samples(w, 8, BitDepth::Sixteen, samples).unwrap();
        let grad = gradient_magnitude(&img);
        assert!(grad.get(3, 4) > 0.0);
        assert!(grad.get(4, 4) > 0.0);
        assert_eq!(grad.get(1, 4), 0.0);
        assert_eq!(grad.get(6, 4), 0.0);
    }
}
