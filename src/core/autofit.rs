use crate::core::interpolation::boundary_values;
use crate::core::primitives::SECONDS_PER_DAY;
use crate::core::series::extend_extent;
use crate::core::windowing::{candles_in_time_window, defined_points_in_time_window};
use crate::core::{ScaleMode, Series, Viewport};

/// Union of the time extents of all series.
#[must_use]
pub fn x_extent<'a>(series: impl IntoIterator<Item = &'a Series>) -> Option<(f64, f64)> {
    series
        .into_iter()
        .filter_map(Series::time_extent)
        .fold(None, |acc, (low, high)| extend_extent(acc, low, high))
}

/// Value extent of the series over `[x_min, x_max]`.
///
/// Raw samples inside the window are combined with the boundary-interpolated
/// values, so a segment crossing the window edge contributes its value at the
/// edge.
#[must_use]
pub fn y_extent<'a>(
    series: impl IntoIterator<Item = &'a Series>,
    x_min: f64,
    x_max: f64,
) -> Option<(f64, f64)> {
    let mut extent = None;
    for series in series {
        match series {
            Series::Line(line) => {
                for (_, value) in defined_points_in_time_window(&line.points, x_min, x_max) {
                    extent = extend_extent(extent, value, value);
                }
            }
            Series::Point(point) => {
                for (_, value) in defined_points_in_time_window(&point.points, x_min, x_max) {
                    extent = extend_extent(extent, value, value);
                }
            }
            Series::Candle(candle) => {
                for bar in candles_in_time_window(&candle.points, x_min, x_max) {
                    extent = extend_extent(extent, bar.low, bar.high);
                }
            }
        }

        let boundaries = boundary_values(series, x_min, x_max);
        for value in [boundaries.start, boundaries.end].into_iter().flatten() {
            extent = extend_extent(extent, value, value);
        }
    }
    extent
}

/// Pads a fitted value extent so the extremes sit `margin_ratio` of the plot
/// height away from the plot edges.
///
/// Padding is applied in the scale mode's transformed space. When every value
/// shares a sign the padded domain does not cross zero.
#[must_use]
pub fn inflate_y_domain(extent: (f64, f64), mode: ScaleMode, margin_ratio: f64) -> (f64, f64) {
    let (low, high) = extent;
    let transformed_low = mode.transform(low);
    let transformed_high = mode.transform(high);
    let pad = (transformed_high - transformed_low) * margin_ratio / (1.0 - 2.0 * margin_ratio);
    if !pad.is_finite() {
        return extent;
    }

    let mut padded_low = mode.untransform(transformed_low - pad);
    let mut padded_high = mode.untransform(transformed_high + pad);
    if low >= 0.0 {
        padded_low = padded_low.max(0.0);
    }
    if high <= 0.0 {
        padded_high = padded_high.min(0.0);
    }
    (padded_low, padded_high)
}

/// Resolves the X domain: explicit viewport bounds win, otherwise the union
/// of series extents, otherwise one day starting at the epoch.
#[must_use]
pub fn resolve_x_domain<'a>(
    viewport: &Viewport,
    series: impl IntoIterator<Item = &'a Series>,
) -> (f64, f64) {
    viewport
        .x_domain
        .or_else(|| x_extent(series))
        .unwrap_or((0.0, SECONDS_PER_DAY))
}

/// Resolves the Y domain: explicit viewport bounds win, otherwise the padded
/// auto-fit over `x_domain`, otherwise `[0, 1]`.
#[must_use]
pub fn resolve_y_domain<'a>(
    viewport: &Viewport,
    series: impl IntoIterator<Item = &'a Series>,
    x_domain: (f64, f64),
    margin_ratio: f64,
) -> (f64, f64) {
    if let Some(domain) = viewport.y_domain {
        return domain;
    }
    y_extent(series, x_domain.0, x_domain.1)
        .map(|extent| inflate_y_domain(extent, viewport.scale_mode, margin_ratio))
        .unwrap_or((0.0, 1.0))
}
