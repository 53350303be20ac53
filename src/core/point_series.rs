use serde::{Deserialize, Serialize};

use crate::core::windowing::defined_points_in_time_window;
use crate::core::{Scale, SeriesPoint};

/// Diamond marker centred on one defined point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiamondMarker {
    pub center_x: f64,
    pub center_y: f64,
    pub half_size: f64,
}

impl DiamondMarker {
    /// Corners clockwise from the top.
    #[must_use]
    pub fn corners(self) -> [(f64, f64); 4] {
        let Self {
            center_x: x,
            center_y: y,
            half_size: r,
        } = self;
        [(x, y - r), (x + r, y), (x, y + r), (x - r, y)]
    }
}

/// Projects every defined point inside `visible` into an independent marker.
#[must_use]
pub fn project_point_markers(
    points: &[SeriesPoint],
    x_scale: Scale,
    y_scale: Scale,
    visible: (f64, f64),
    half_size: f64,
) -> Vec<DiamondMarker> {
    defined_points_in_time_window(points, visible.0, visible.1)
        .map(|(time, value)| DiamondMarker {
            center_x: x_scale.scale(time),
            center_y: y_scale.scale(value),
            half_size,
        })
        .collect()
}
