//! Window/level display mapping for raylift
//!
//! Interactive viewers remap 16-bit data into an 8-bit display range many
//! times per second as the user drags window/level controls. The engine
//! here precomputes a lookup table over the full sample domain and caches
//! it against the (width, center) pair, so repeated calls with unchanged
//! parameters cost one linear scan with no per-pixel branching or floating
//! point.

mod auto;
mod engine;

pub use auto::auto_window_level;
pub use engine::WindowLevel;
