//! Filtering operations for raylift
//!
//! Per-pixel filters shared by the enhancement stages: separable Gaussian
//! blur, edge-preserving bilateral smoothing, windowed mean/deviation maps,
//! and Sobel gradient magnitude. All hot loops fan out over row ranges on
//! the rayon worker pool; there is no cross-pixel dependency in any filter.

mod bilateral;
mod error;
mod gaussian;
mod gradient;
mod windowed;

pub use bilateral::bilateral;
pub use error::{FilterError, FilterResult};
pub use gaussian::{gaussian_blur, gaussian_kernel_1d};
pub use gradient::gradient_magnitude;
pub use windowed::{WindowedStats, windowed_stats};
