mod chart_inputs;
mod crosshair_render_frame_builder;
mod current_value_render_frame_builder;
mod engine;
mod engine_config;
mod interaction_controller;
mod json_contract;
mod layout_resolver;
mod overlay_cache;
mod readout;
mod render_coordinator;
mod render_frame_builder;
mod series_render_frame_builder;

pub use chart_inputs::{ChartInputs, RedrawKey, should_redraw};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use json_contract::{VIEWPORT_JSON_SCHEMA_V1, ViewportJsonContractV1};
pub use layout_resolver::{ChartLayout, CurrentValue};
pub use readout::{Readout, ReadoutValue};
