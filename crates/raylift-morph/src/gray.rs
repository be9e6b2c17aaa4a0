//! Grayscale morphology with brick structuring elements
//!
//! - **Dilation**: maximum over the brick neighborhood (expands bright)
//! - **Erosion**: minimum over the brick neighborhood (shrinks bright)
//! - **Opening**: erosion then dilation (removes bright features thinner
//!   than the brick)
//!
//! Directional opening with a 1×N or N×1 brick is the primitive behind
//! thin-line detection: subtracting the opened image from the original
//! leaves only near-1-pixel-wide bright structures.

use raylift_core::GrayImage;

/// One separable min/max pass along a row or column direction.
///
/// `hsize`/`vsize` are full brick extents; even values are widened to the
/// next odd value, zero is treated as 1 (identity in that direction).
fn brick_pass(image: &GrayImage, hsize: u32, vsize: u32, take_max: bool) -> GrayImage {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let half_h = (hsize.max(1) / 2) as i32;
    let half_v = (vsize.max(1) / 2) as i32;
    let src = image.samples();

    // Horizontal pass
    let mut tmp = vec![0u16; src.len()];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            let x0 = (x as i32 - half_h).max(0) as usize;
            let x1 = ((x as i32 + half_h) as usize).min(w - 1);
            let mut acc = row[x0];
            for &v in &row[x0 + 1..=x1] {
                acc = if take_max { acc.max(v) } else { acc.min(v) };
            }
            tmp[y * w + x] = acc;
        }
    }

    // Vertical pass
    let mut out = image.create_template();
    let out_samples = out.samples_mut();
    for y in 0..h {
        let y0 = (y as i32 - half_v).max(0) as usize;
        let y1 = ((y as i32 + half_v) as usize).min(h - 1);
        for x in 0..w {
            let mut acc = tmp[y0 * w + x];
            for yy in (y0 + 1)..=y1 {
                let v = tmp[yy * w + x];
                acc = if take_max { acc.max(v) } else { acc.min(v) };
            }
            out_samples[y * w + x] = acc;
        }
    }
    out
}

/// Dilate with an `hsize` × `vsize` brick (neighborhood maximum).
pub fn dilate_gray(image: &GrayImage, hsize: u32, vsize: u32) -> GrayImage {
    brick_pass(image, hsize, vsize, true)
}

/// Erode with an `hsize` × `vsize` brick (neighborhood minimum).
pub fn erode_gray(image: &GrayImage, hsize: u32, vsize: u32) -> GrayImage {
    brick_pass(image, hsize, vsize, false)
}

/// Open with an `hsize` × `vsize` brick (erosion followed by dilation).
///
/// Removes bright features that cannot contain the brick.
pub fn open_gray(image: &GrayImage, hsize: u32, vsize: u32) -> GrayImage {
    dilate_gray(&erode_gray(image, hsize, vsize), hsize, vsize)
}
