//! Histogram generation and percentile scans
//!
//! The histogram always covers the full sample domain of the image depth
//! (256 bins for 8 bpp, 65536 bins for 16 bpp) so that downstream lookup
//! tables and threshold searches can index it directly by sample value.

use super::GrayImage;

/// Compute the grayscale histogram of an image.
///
/// Returns one `u64` count per possible sample value; the vector length is
/// [`BitDepth::domain_len`](super::BitDepth::domain_len).
pub fn histogram(image: &GrayImage) -> Vec<u64> {
    let mut hist = vec![0u64; image.depth().domain_len()];
    for &v in image.samples() {
        hist[v as usize] += 1;
    }
    hist
}

/// Find the sample values bounding the `[lo_frac, hi_frac]` mass of a
/// histogram by cumulative-sum scan.
///
/// When `skip_zero_bin` is set, bin 0 is excluded from the population first;
/// this discards a hard zero background (collimator / dead detector area)
/// before the percentile search.
///
/// Returns `None` when the (remaining) population is empty or collapses to
/// a single bin, i.e. the percentile interval is degenerate.
pub fn percentile_bounds(
    hist: &[u64],
    lo_frac: f64,
    hi_frac: f64,
    skip_zero_bin: bool,
) -> Option<(u16, u16)> {
    debug_assert!(lo_frac <= hi_frac);
    let start = usize::from(skip_zero_bin);
    let total: u64 = hist[start..].iter().sum();
    if total == 0 {
        return None;
    }

    let lo_target = (total as f64 * lo_frac).ceil() as u64;
    let hi_target = (total as f64 * hi_frac).floor() as u64;

    let mut cum = 0u64;
    let mut lo_val: Option<u16> = None;
    let mut hi_val: Option<u16> = None;
    for (i, &count) in hist.iter().enumerate().skip(start) {
        if count == 0 {
            continue;
        }
        cum += count;
        if lo_val.is_none() && cum >= lo_target {
            lo_val = Some(i as u16);
        }
        if cum >= hi_target {
            hi_val = Some(i as u16);
            break;
        }
    }

    match (lo_val, hi_val) {
        (Some(lo), Some(hi)) if hi > lo => Some((lo, hi)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::BitDepth;

    #[test]
    fn histogram_counts_every_sample() {
        let img =
            GrayImage::from_samples(2, 2, BitDepth::Eight, vec![0, 0, 7, 255]).unwrap();
        let hist = histogram(&img);
        assert_eq!(hist.len(), 256);
        assert_eq!(hist[0], 2);
        assert_eq!(hist[7], 1);
        assert_eq!(hist[255], 1);
        assert_eq!(hist.iter().sum::<u64>(), 4);
    }

    #[test]
    fn histogram_covers_16bit_domain() {
        let img =
            GrayImage::from_samples(1, 2, BitDepth::Sixteen, vec![65535, 1]).unwrap();
        let hist = histogram(&img);
        assert_eq!(hist.len(), 65536);
        assert_eq!(hist[65535], 1);
    }

    #[test]
    fn percentile_bounds_on_uniform_population() {
        // 100 values, one per bin 0..100
        let mut hist = vec![0u64; 256];
        for h in hist.iter_mut().take(100) {
            *h = 1;
        }
        let (lo, hi) = percentile_bounds(&hist, 0.05, 0.95, false).unwrap();
        assert!(lo <= 5 && lo >= 4, "lo = {lo}");
        assert!((94..=95).contains(&hi), "hi = {hi}");
    }

    #[test]
    fn percentile_bounds_skips_zero_bin() {
        let mut hist = vec![0u64; 256];
        hist[0] = 1_000_000; // dominant background
        hist[100] = 10;
        hist[200] = 10;
        let (lo, hi) = percentile_bounds(&hist, 0.05, 0.95, true).unwrap();
        assert_eq!(lo, 100);
        assert_eq!(hi, 200);
    }

    #[test]
    fn percentile_bounds_degenerate_is_none() {
        let mut hist = vec![0u64; 256];
        hist[42] = 500; // single-bin population
        assert!(percentile_bounds(&hist, 0.05, 0.95, false).is_none());
        let empty = vec![0u64; 256];
        assert!(percentile_bounds(&empty, 0.05, 0.95, false).is_none());
    }
}
