//! Test the full enhancement chain on synthetic radiograph scenes
//!
//! Exercises ROI detection, retinex decomposition, and the five-stage
//! enhancer together, checking the outer invariants an integrating viewer
//! relies on: geometry preservation, bit-exact pixels outside the ROI,
//! best-effort degradation with warnings, and deterministic output.

use raylift_core::{BitDepth, GrayImage, RoiMask};
use raylift_enhance::{EnhanceParams, Stage, enhance, enhance_with_roi, retinex};
use raylift_region::{RoiOptions, ThresholdPolarity};

/// Dark subject plate: a textured dark square centered on a saturated
/// bright background, the typical raw radiograph layout.
fn make_plate(size: u32) -> GrayImage {
    let mut img = GrayImage::new(size, size, BitDepth::Sixteen).unwrap();
    for s in img.samples_mut() {
        *s = 58000;
    }
    let lo = size / 4;
    let hi = size - size / 4;
    for y in lo..hi {
        for x in lo..hi {
            img.set(x, y, (6000 + (x * 131 + y * 57) % 3000) as u16)
                .unwrap();
        }
    }
    img
}

#[test]
fn chain_preserves_geometry_and_depth() {
    let img = make_plate(48);
    let outcome =
        enhance_with_roi(&img, &EnhanceParams::default(), &RoiOptions::default()).unwrap();
    assert_eq!(outcome.image.width(), 48);
    assert_eq!(outcome.image.height(), 48);
    assert_eq!(outcome.image.depth(), BitDepth::Sixteen);
}

#[test]
fn background_outside_detected_roi_is_untouched() {
    let img = make_plate(48);
    let outcome =
        enhance_with_roi(&img, &EnhanceParams::default(), &RoiOptions::default()).unwrap();
    // Corners are far from the dark subject; they must survive bit-exact.
    for &(x, y) in &[(0, 0), (47, 0), (0, 47), (47, 47), (2, 2)] {
        assert_eq!(outcome.image.get(x, y), Some(58000), "at ({x},{y})");
    }
}

#[test]
fn subject_region_is_brightened() {
    let img = make_plate(48);
    let outcome =
        enhance_with_roi(&img, &EnhanceParams::default(), &RoiOptions::default()).unwrap();
    // Mean over the subject square must rise: the chain exists to lift
    // dark anatomy into a viewable range.
    let mut before = 0u64;
    let mut after = 0u64;
    let mut n = 0u64;
    for y in 14..34 {
        for x in 14..34 {
            before += img.get(x, y).unwrap() as u64;
            after += outcome.image.get(x, y).unwrap() as u64;
            n += 1;
        }
    }
    assert!(after / n > before / n, "mean {} !> {}", after / n, before / n);
}

#[test]
fn chain_is_deterministic() {
    let img = make_plate(32);
    let a = enhance_with_roi(&img, &EnhanceParams::default(), &RoiOptions::default())
        .unwrap();
    let b = enhance_with_roi(&img, &EnhanceParams::default(), &RoiOptions::default())
        .unwrap();
    assert_eq!(a.image.samples(), b.image.samples());
}

#[test]
fn flat_scene_degrades_with_warnings_not_errors() {
    let img = GrayImage::new(24, 24, BitDepth::Sixteen).unwrap(); // all zero
    let outcome =
        enhance_with_roi(&img, &EnhanceParams::default(), &RoiOptions::default()).unwrap();
    assert!(outcome.image.sizes_equal(&img));
    assert!(!outcome.warnings.is_empty());
    // The all-zero ROI must surface as a brightness-stage degradation.
    assert!(
        outcome
            .warnings
            .iter()
            .any(|w| w.stage() == Stage::Brightness)
    );
}

#[test]
fn bright_subject_polarity_flips_the_mask() {
    // Bright subject on dark background: the inverse of make_plate.
    let mut img = GrayImage::new(48, 48, BitDepth::Sixteen).unwrap();
    for s in img.samples_mut() {
        *s = 2000;
    }
    for y in 12..36 {
        for x in 12..36 {
            img.set(x, y, (50000 + (x * 97 + y * 41) % 2000) as u16)
                .unwrap();
        }
    }
    let options = RoiOptions {
        polarity: ThresholdPolarity::BrightIsSubject,
        ..RoiOptions::default()
    };
    let outcome = enhance_with_roi(&img, &EnhanceParams::default(), &options).unwrap();
    // Dark background survives, bright subject is processed.
    assert_eq!(outcome.image.get(0, 0), Some(2000));
}

#[test]
fn zeroed_parameters_still_complete() {
    let img = make_plate(32);
    let params = EnhanceParams {
        brightness_gain: 1.0,
        contrast_preservation: 0.0,
        noise_control: 0.0,
        halo_suppression: 0.0,
        retinex_strength: 0.0,
        ..EnhanceParams::default()
    };
    let outcome = enhance_with_roi(&img, &params, &RoiOptions::default()).unwrap();
    assert!(outcome.image.sizes_equal(&img));
}

#[test]
fn retinex_preserves_the_global_mean() {
    let img = make_plate(32);
    let (out, warning) = retinex(&img, 0.6, &[2.0, 8.0], &[0.5, 0.5]);
    assert!(warning.is_none());
    let before = img.mean();
    let after = out.mean();
    assert!(
        (before - after).abs() / before < 0.02,
        "mean drifted: {before} -> {after}"
    );
}

#[test]
fn explicit_mask_chain_matches_composite_contract() {
    let img = make_plate(32);
    let mut mask = RoiMask::all_off(32, 32);
    for y in 8..24 {
        for x in 8..24 {
            mask.set(x, y, true);
        }
    }
    let outcome = enhance(&img, &mask, &EnhanceParams::default()).unwrap();
    let mut changed = 0usize;
    for y in 0..32 {
        for x in 0..32 {
            let same = outcome.image.get(x, y) == img.get(x, y);
            if !mask.is_on(x, y) {
                assert!(same, "outside-ROI pixel changed at ({x},{y})");
            } else if !same {
                changed += 1;
            }
        }
    }
    assert!(changed > 0, "enhancement was a global no-op");
}
