//! Enhancement parameters
//!
//! Supplied by the caller (UI controls or a batch driver) and immutable per
//! invocation. Out-of-range values are clamped at entry, never rejected:
//! an interactive slider must not be able to make the pipeline throw.

/// Tunable parameters for the enhancement pipeline.
#[derive(Debug, Clone)]
pub struct EnhanceParams {
    /// Multiplicative brightness target for the ROI mean; must be > 0
    pub brightness_gain: f32,
    /// How much boosting-lost local contrast to restore, in [0, 1]
    pub contrast_preservation: f32,
    /// Edge-preserving denoise intensity, in [0, 1]; 0 is an exact no-op
    pub noise_control: f32,
    /// Edge-band smoothing blend against overshoot, in [0, 1]
    pub halo_suppression: f32,
    /// Retinex reflectance strength; 0 collapses detail to the mean
    pub retinex_strength: f32,
    /// Gaussian scales (blur standard deviations) for retinex, small to large
    pub scales: Vec<f32>,
    /// Per-scale weights; normalized to sum 1 at validation
    pub weights: Vec<f32>,
}

impl Default for EnhanceParams {
    fn default() -> Self {
        Self {
            brightness_gain: 1.3,
            contrast_preservation: 0.5,
            noise_control: 0.3,
            halo_suppression: 0.5,
            retinex_strength: 0.6,
            scales: vec![2.0, 8.0, 32.0],
            weights: vec![1.0 / 3.0; 3],
        }
    }
}

impl EnhanceParams {
    /// Clamp every field into its valid range and normalize the scale
    /// weights. Invalid values fall back to defaults rather than erroring.
    pub fn validated(&self) -> EnhanceParams {
        let defaults = EnhanceParams::default();

        let brightness_gain = if self.brightness_gain.is_finite() && self.brightness_gain > 0.0 {
            self.brightness_gain
        } else {
            defaults.brightness_gain
        };

        let frac = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };

        let retinex_strength = if self.retinex_strength.is_finite() && self.retinex_strength >= 0.0
        {
            self.retinex_strength
        } else {
            defaults.retinex_strength
        };

        let mut scales: Vec<f32> = self
            .scales
            .iter()
            .copied()
            .filter(|s| s.is_finite() && *s > 0.0)
            .collect();
        if scales.is_empty() {
            scales = defaults.scales.clone();
        }

        let weights = normalize_weights(&self.weights, scales.len());

        EnhanceParams {
            brightness_gain,
            contrast_preservation: frac(self.contrast_preservation),
            noise_control: frac(self.noise_control),
            halo_suppression: frac(self.halo_suppression),
            retinex_strength,
            scales,
            weights,
        }
    }
}

/// Normalize `weights` to `count` entries summing to 1; equal weights when
/// the input is missing, mismatched, or not summable.
fn normalize_weights(weights: &[f32], count: usize) -> Vec<f32> {
    if weights.len() == count {
        let sum: f32 = weights.iter().sum();
        if sum.is_finite() && sum > 0.0 && weights.iter().all(|w| w.is_finite() && *w >= 0.0) {
            return weights.iter().map(|w| w / sum).collect();
        }
    }
    vec![1.0 / count as f32; count]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let p = EnhanceParams::default().validated();
        let sum: f32 = p.weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(p.weights.len(), p.scales.len());
    }

    #[test]
    fn fractional_controls_are_clamped_not_rejected() {
        let p = EnhanceParams {
            contrast_preservation: 3.0,
            noise_control: -1.0,
            halo_suppression: f32::NAN,
            ..Default::default()
        }
        .validated();
        assert_eq!(p.contrast_preservation, 1.0);
        assert_eq!(p.noise_control, 0.0);
        assert_eq!(p.halo_suppression, 0.0);
    }

    #[test]
    fn bad_gain_falls_back_to_default() {
        let p = EnhanceParams {
            brightness_gain: -2.0,
            ..Default::default()
        }
        .validated();
        assert_eq!(p.brightness_gain, EnhanceParams::default().brightness_gain);
    }

    #[test]
    fn mismatched_weights_become_equal() {
        let p = EnhanceParams {
            scales: vec![1.0, 4.0],
            weights: vec![0.2, 0.3, 0.5],
            ..Default::default()
        }
        .validated();
        assert_eq!(p.weights, vec![0.5, 0.5]);
    }

    #[test]
    fn unnormalized_weights_are_rescaled() {
        let p = EnhanceParams {
            scales: vec![1.0, 4.0],
            weights: vec![1.0, 3.0],
            ..Default::default()
        }
        .validated();
        assert_eq!(p.weights, vec![0.25, 0.75]);
    }

    #[test]
    fn nonpositive_scales_are_dropped() {
        let p = EnhanceParams {
            scales: vec![-1.0, 0.0, 5.0],
            weights: vec![],
            ..Default::default()
        }
        .validated();
        assert_eq!(p.scales, vec![5.0]);
        assert_eq!(p.weights, vec![1.0]);
    }
}
