//! The five enhancement sub-stages, in pipeline order
//!
//! Each stage is a pure function from its input image to a new image, and
//! each is independently guarded: a degenerate or non-finite intermediate
//! turns the stage into an identity transform reported via `StageWarning`.
//! The order is fixed; stages must not be reordered (thin-line protection
//! runs last so the halo blend cannot overwrite it).

mod brightness;
mod contrast;
mod halo;
mod lines;
mod noise;

pub(crate) use brightness::brightness_boost;
pub(crate) use contrast::restore_contrast;
pub(crate) use halo::suppress_halos;
pub(crate) use lines::protect_thin_lines;
pub(crate) use noise::suppress_noise;
