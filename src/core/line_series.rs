use serde::{Deserialize, Serialize};

use crate::core::windowing::visible_point_range;
use crate::core::{Scale, SeriesPoint};

/// One contiguous run of a line series in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    pub points: Vec<(f64, f64)>,
}

impl LinePath {
    /// Closes the path down to `baseline_y` for the fill pass.
    ///
    /// Returns `None` when there are fewer than two points to enclose.
    #[must_use]
    pub fn fill_polygon(&self, baseline_y: f64) -> Option<Vec<(f64, f64)>> {
        let (first, last) = match self.points.as_slice() {
            [first, .., last] => (*first, *last),
            _ => return None,
        };
        let mut polygon = Vec::with_capacity(self.points.len() + 2);
        polygon.extend_from_slice(&self.points);
        polygon.push((last.0, baseline_y));
        polygon.push((first.0, baseline_y));
        Some(polygon)
    }
}

/// Projects a time-sorted line series into pixel sub-paths.
///
/// A gap (`value: None`) ends the current path; the next defined point starts
/// a new one. With `staircase`, each step first runs horizontally at the
/// previous value to the next timestamp and then vertically to the new value.
/// Only points needed for `visible` (plus one neighbour each side) are
/// projected; the caller clips to the plot.
#[must_use]
pub fn project_line_paths(
    points: &[SeriesPoint],
    staircase: bool,
    x_scale: Scale,
    y_scale: Scale,
    visible: (f64, f64),
) -> Vec<LinePath> {
    let window = visible_point_range(points, visible.0, visible.1);
    let mut paths = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for point in &points[window] {
        let Some(value) = point.defined_value() else {
            if !current.is_empty() {
                paths.push(LinePath {
                    points: std::mem::take(&mut current),
                });
            }
            continue;
        };

        let x = x_scale.scale(point.time);
        let y = y_scale.scale(value);
        if let Some(&(_, previous_y)) = current.last().filter(|_| staircase) {
            current.push((x, previous_y));
        }
        current.push((x, y));
    }

    if !current.is_empty() {
        paths.push(LinePath { points: current });
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::LinePath;

    #[test]
    fn fill_polygon_needs_two_points() {
        let single = LinePath {
            points: vec![(1.0, 2.0)],
        };
        assert!(single.fill_polygon(10.0).is_none());

        let pair = LinePath {
            points: vec![(1.0, 2.0), (5.0, 4.0)],
        };
        assert_eq!(
            pair.fill_polygon(10.0),
            Some(vec![(1.0, 2.0), (5.0, 4.0), (5.0, 10.0), (1.0, 10.0)])
        );
    }
}
