//! Otsu threshold selection
//!
//! Picks the histogram split that maximizes the between-class variance of
//! the two resulting populations, which for a bimodal exposure (subject vs.
//! saturated background) lands between the modes.

/// Compute Otsu's threshold from a grayscale histogram.
///
/// Returns the value `t` maximizing between-class variance; pixels `<= t`
/// form the lower class. Returns `None` when the histogram is degenerate
/// (empty, or all mass in a single bin) and no meaningful split exists.
pub fn otsu_threshold(hist: &[u64]) -> Option<u16> {
    let total: u64 = hist.iter().sum();
    if total == 0 {
        return None;
    }
    let occupied = hist.iter().filter(|&&c| c > 0).count();
    if occupied < 2 {
        return None;
    }

    let total_f = total as f64;
    let weighted_total: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut best_t = 0usize;
    let mut best_var = -1.0f64;
    let mut count_lo = 0u64;
    let mut sum_lo = 0.0f64;

    for (t, &c) in hist.iter().enumerate() {
        count_lo += c;
        sum_lo += t as f64 * c as f64;
        if count_lo == 0 {
            continue;
        }
        let count_hi = total - count_lo;
        if count_hi == 0 {
            break;
        }
        let w_lo = count_lo as f64 / total_f;
        let w_hi = count_hi as f64 / total_f;
        let mean_lo = sum_lo / count_lo as f64;
        let mean_hi = (weighted_total - sum_lo) / count_hi as f64;
        let diff = mean_lo - mean_hi;
        let var = w_lo * w_hi * diff * diff;
        if var > best_var {
            best_var = var;
            best_t = t;
        }
    }

    Some(best_t as u16)
}
