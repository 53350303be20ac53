//! folio-chart: interactive time-series charting engine.
//!
//! The host hands over immutable series snapshots plus a viewport each frame;
//! the engine resolves domains and axes, draws a backend-agnostic
//! [`render::RenderFrame`] and turns pointer gestures into viewport updates.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartInputs};
pub use error::{ChartError, ChartResult};
