use std::ops::Range;

use crate::core::{CandlePoint, SeriesPoint};

fn ordered(start: f64, end: f64) -> (f64, f64) {
    if start <= end { (start, end) } else { (end, start) }
}

/// Index range of time-sorted points needed to draw `[start, end]`: every
/// point inside the window plus one neighbour on each side, so segments
/// crossing the window edges are kept.
#[must_use]
pub fn visible_point_range(points: &[SeriesPoint], start: f64, end: f64) -> Range<usize> {
    let (min_t, max_t) = ordered(start, end);
    let first_inside = points.partition_point(|point| point.time < min_t);
    let after_last = points.partition_point(|point| point.time <= max_t);
    first_inside.saturating_sub(1)..(after_last + 1).min(points.len())
}

/// Defined `(time, value)` pairs whose time falls inside an inclusive window.
pub fn defined_points_in_time_window(
    points: &[SeriesPoint],
    start: f64,
    end: f64,
) -> impl Iterator<Item = (f64, f64)> + '_ {
    let (min_t, max_t) = ordered(start, end);
    points
        .iter()
        .filter(move |point| point.time >= min_t && point.time <= max_t)
        .filter_map(|point| point.defined_value().map(|value| (point.time, value)))
}

/// Candles whose `[open_time, close_time]` bucket overlaps an inclusive window.
///
/// Candles are sorted by open time and buckets do not overlap, so both ends
/// are found by binary search.
#[must_use]
pub fn candles_in_time_window(candles: &[CandlePoint], start: f64, end: f64) -> &[CandlePoint] {
    let (min_t, max_t) = ordered(start, end);
    let first = candles.partition_point(|candle| candle.close_time < min_t);
    let after_last = candles.partition_point(|candle| candle.open_time <= max_t);
    if first >= after_last {
        return &[];
    }
    &candles[first..after_last]
}
