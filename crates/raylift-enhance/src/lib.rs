//! X-ray enhancement pipeline for raylift
//!
//! Makes faint linear defects and low-contrast structures visible without
//! over-amplifying noise or creating halo artifacts. Two public operations:
//!
//! - [`retinex`]: multi-scale illumination/reflectance decomposition
//! - [`enhance`]: the five-stage contrast-protected enhancer, confined to
//!   a region-of-interest mask
//!
//! plus [`enhance_with_roi`], which chains ROI detection, retinex, and the
//! enhancer the way an interactive viewer calls them.
//!
//! # Failure semantics
//!
//! Enhancement is best effort, never fatal. Every stage is independently
//! guarded: a numerical edge case inside a stage degrades that stage to an
//! identity transform and is reported as a [`StageWarning`] in the
//! [`EnhanceOutcome`] instead of aborting the pipeline. Only malformed
//! top-level input (an image/mask dimension mismatch) is a hard error.

mod error;
mod params;
mod pipeline;
mod retinex;
mod stages;
mod warnings;

pub use error::{EnhanceError, EnhanceResult};
pub use params::EnhanceParams;
pub use pipeline::{EnhanceOutcome, composite_outside, enhance, enhance_with_roi};
pub use retinex::retinex;
pub use warnings::{Stage, StageWarning};
