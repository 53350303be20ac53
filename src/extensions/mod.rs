//! Derived overlays computed from host series.
//!
//! Overlays never mutate their source; each produces a new line series that
//! the engine draws on the overlay layer.

mod moving_average;
mod overlay;

pub use moving_average::simple_moving_average;
pub use overlay::{OverlaySpec, OverlayTool, derive_overlay_series};
