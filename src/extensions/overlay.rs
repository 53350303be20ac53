use serde::{Deserialize, Serialize};

use crate::core::{LineSeries, Series, SeriesId};
use crate::extensions::simple_moving_average;
use crate::render::Color;

/// Closed set of overlay computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum OverlayTool {
    SimpleMovingAverage { range: usize },
}

/// Host request for one derived overlay drawn over the `source` series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySpec {
    pub id: SeriesId,
    pub source: SeriesId,
    pub tool: OverlayTool,
    pub color: Color,
    #[serde(default = "default_overlay_line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub priority: Option<i32>,
}

fn default_overlay_line_width() -> f64 {
    LineSeries::DEFAULT_LINE_WIDTH
}

impl OverlaySpec {
    #[must_use]
    pub fn new(
        id: impl Into<SeriesId>,
        source: impl Into<SeriesId>,
        tool: OverlayTool,
        color: Color,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            tool,
            color,
            line_width: LineSeries::DEFAULT_LINE_WIDTH,
            priority: None,
        }
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Applies the overlay tool to `source` and wraps the result as a line series
/// carrying the overlay's id, colour and priority.
#[must_use]
pub fn derive_overlay_series(spec: &OverlaySpec, source: &Series) -> LineSeries {
    let points = match spec.tool {
        OverlayTool::SimpleMovingAverage { range } => simple_moving_average(source, range),
    };
    let mut series = LineSeries::new(spec.id.clone(), points, spec.color)
        .with_line_width(spec.line_width);
    series.priority = spec.priority;
    series
}
