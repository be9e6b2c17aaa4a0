//! Per-stage degradation reports
//!
//! When a stage recovers from a numerical edge case by degrading to an
//! identity transform, it reports a [`StageWarning`]. Warnings are
//! aggregated into the pipeline outcome so callers and tests can observe
//! degradation without a process-wide logger.

use std::fmt;
use thiserror::Error;

/// Pipeline stage identifiers, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Retinex decomposition
    Retinex,
    /// Brightness boost
    Brightness,
    /// Noise suppression
    Noise,
    /// Local contrast preservation
    Contrast,
    /// Halo suppression
    Halo,
    /// Thin-line protection
    ThinLines,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Retinex => "retinex",
            Stage::Brightness => "brightness",
            Stage::Noise => "noise",
            Stage::Contrast => "contrast",
            Stage::Halo => "halo",
            Stage::ThinLines => "thin-lines",
        };
        f.write_str(name)
    }
}

/// A recoverable degradation inside one pipeline stage.
///
/// The stage that produced the warning ran as an identity transform; the
/// pipeline output is still valid and displayable, merely less aggressively
/// enhanced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StageWarning {
    /// The stage input was degenerate (empty ROI, all-zero region, ...)
    #[error("{stage} stage skipped on degenerate input: {detail}")]
    DegenerateInput {
        /// Originating stage
        stage: Stage,
        /// Human-readable description
        detail: String,
    },

    /// A computation produced a non-finite or otherwise unusable result
    #[error("{stage} stage fell back to identity: {detail}")]
    NumericalFallback {
        /// Originating stage
        stage: Stage,
        /// Human-readable description
        detail: String,
    },
}

impl StageWarning {
    /// The stage that reported this warning.
    pub fn stage(&self) -> Stage {
        match self {
            StageWarning::DegenerateInput { stage, .. } => *stage,
            StageWarning::NumericalFallback { stage, .. } => *stage,
        }
    }
}
