//! Series values at arbitrary timestamps.
//!
//! Used for the current-value callouts at the right edge of the plot, for the
//! value-under-mouse readout and for Y auto-fitting, which has to see values
//! interpolated at the window edges and not only the raw in-range samples.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::windowing::candles_in_time_window;
use crate::core::{CandlePoint, Series, SeriesPoint};

/// Series values at the two edges of a time window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundaryValues {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

/// Value of a line series at `time`.
///
/// Brackets `time` with the surrounding defined points (gaps are skipped) and
/// interpolates by time fraction, or holds the earlier value when
/// `staircase` is set. A point exactly at `time` is returned unchanged.
/// Before the first defined point there is no value; after the last one a
/// staircase keeps holding its final value while a linear line has none.
#[must_use]
pub fn line_value_at(points: &[SeriesPoint], time: f64, staircase: bool) -> Option<f64> {
    if !time.is_finite() {
        return None;
    }

    let mut previous: Option<(f64, f64)> = None;
    for point in points {
        let Some(value) = point.defined_value() else {
            continue;
        };
        if point.time == time {
            return Some(value);
        }
        if point.time > time {
            let (prev_time, prev_value) = previous?;
            if staircase {
                return Some(prev_value);
            }
            let fraction = (time - prev_time) / (point.time - prev_time);
            return Some(prev_value + (value - prev_value) * fraction);
        }
        previous = Some((point.time, value));
    }

    if staircase {
        previous.map(|(_, value)| value)
    } else {
        None
    }
}

/// Close of the candle whose bucket contains `time`.
#[must_use]
pub fn candle_value_at(candles: &[CandlePoint], time: f64) -> Option<f64> {
    candles_in_time_window(candles, time, time)
        .last()
        .map(|candle| candle.close)
}

/// Nearest defined point value to `time`, without interpolation.
#[must_use]
pub fn nearest_point_value(points: &[SeriesPoint], time: f64) -> Option<f64> {
    points
        .iter()
        .filter_map(|point| point.defined_value().map(|value| (point.time, value)))
        .min_by_key(|(point_time, _)| OrderedFloat((point_time - time).abs()))
        .map(|(_, value)| value)
}

/// Value of any series at `time`, as shown by the mouse readout.
#[must_use]
pub fn value_at(series: &Series, time: f64) -> Option<f64> {
    match series {
        Series::Line(line) => line_value_at(&line.points, time, line.staircase),
        Series::Point(point) => nearest_point_value(&point.points, time),
        Series::Candle(candle) => candle_value_at(&candle.points, time),
    }
}

/// Values of a series at `x_min` and `x_max`.
///
/// Line series interpolate (linearly or staircase). Candles are already
/// bucketed, so each boundary takes the close of the nearest candle inside the
/// window instead of interpolating across bodies. Point series behave like
/// candles with their nearest in-window defined value.
#[must_use]
pub fn boundary_values(series: &Series, x_min: f64, x_max: f64) -> BoundaryValues {
    match series {
        Series::Line(line) => BoundaryValues {
            start: line_value_at(&line.points, x_min, line.staircase),
            end: line_value_at(&line.points, x_max, line.staircase),
        },
        Series::Point(point) => {
            let mut inside = point.points.iter().filter_map(|p| {
                p.defined_value()
                    .filter(|_| p.time >= x_min && p.time <= x_max)
            });
            let start = inside.next();
            let end = inside.last().or(start);
            BoundaryValues { start, end }
        }
        Series::Candle(candle) => {
            let visible = candles_in_time_window(&candle.points, x_min, x_max);
            BoundaryValues {
                start: visible.first().map(|c| c.close),
                end: visible.last().map(|c| c.close),
            }
        }
    }
}
