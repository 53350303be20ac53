use serde::{Deserialize, Serialize};

use crate::core::{SeriesId, value_at};
use crate::render::Renderer;

use super::{ChartEngine, ChartInputs};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadoutValue {
    pub series_id: SeriesId,
    pub value: Option<f64>,
}

/// Values under the mouse: one entry per enabled host series, input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    pub time: f64,
    pub values: Vec<ReadoutValue>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Reads every enabled series at the hovered timestamp.
    ///
    /// Uses the last drawn frame's time scale; `None` without a hover position
    /// inside the plot.
    #[must_use]
    pub fn readout(&self, inputs: &ChartInputs) -> Option<Readout> {
        let mouse = self.visible_mouse(inputs)?;
        let axes = self.last_axes?;
        if !axes.plot.contains(mouse.x, mouse.y) {
            return None;
        }
        let time = axes.x_scale.invert(mouse.x);
        let values = self
            .enabled_host_series(inputs)
            .map(|series| ReadoutValue {
                series_id: series.id().clone(),
                value: value_at(series, time),
            })
            .collect();
        Some(Readout { time, values })
    }
}
