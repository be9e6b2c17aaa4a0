//! Binary mask morphology
//!
//! Close-then-open with a small brick is the standard cleanup after
//! thresholding: closing fills small holes inside the subject, opening
//! removes isolated speckle outside it.

use raylift_core::RoiMask;

fn brick_pass(mask: &RoiMask, half: u32, take_max: bool) -> RoiMask {
    let w = mask.width() as usize;
    let h = mask.height() as usize;
    let half = half as i32;
    let src = mask.data();

    // Horizontal pass
    let mut tmp = vec![0u8; src.len()];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for (x, t) in tmp[y * w..(y + 1) * w].iter_mut().enumerate() {
            let x0 = (x as i32 - half).max(0) as usize;
            let x1 = ((x as i32 + half) as usize).min(w - 1);
            let mut acc = row[x0];
            for &v in &row[x0 + 1..=x1] {
                acc = if take_max { acc.max(v) } else { acc.min(v) };
            }
            *t = acc;
        }
    }

    // Vertical pass
    let mut out = if take_max {
        RoiMask::all_off(mask.width(), mask.height())
    } else {
        RoiMask::all_on(mask.width(), mask.height())
    };
    let out_data = out.data_mut();
    for y in 0..h {
        let y0 = (y as i32 - half).max(0) as usize;
        let y1 = ((y as i32 + half) as usize).min(h - 1);
        for x in 0..w {
            let mut acc = tmp[y0 * w + x];
            for yy in (y0 + 1)..=y1 {
                let v = tmp[yy * w + x];
                acc = if take_max { acc.max(v) } else { acc.min(v) };
            }
            out_data[y * w + x] = acc;
        }
    }
    out
}

/// Dilate a mask with a square brick of half-width `half`.
pub fn dilate_mask(mask: &RoiMask, half: u32) -> RoiMask {
    if half == 0 {
        return mask.clone();
    }
    brick_pass(mask, half, true)
}

/// Erode a mask with a square brick of half-width `half`.
pub fn erode_mask(mask: &RoiMask, half: u32) -> RoiMask {
    if half == 0 {
        return mask.clone();
    }
    brick_pass(mask, half, false)
}

/// Open a mask (erode then dilate): removes speckle smaller than the brick.
pub fn open_mask(mask: &RoiMask, half: u32) -> RoiMask {
    dilate_mask(&erode_mask(mask, half), half)
}

/// Close a mask (dilate then erode): fills holes smaller than the brick.
pub fn close_mask(mask: &RoiMask, half: u32) -> RoiMask {
    erode_mask(&dilate_mask(mask, half), half)
}
