use std::collections::VecDeque;

use crate::core::{Series, SeriesPoint};

/// Trailing simple moving average over the last `range` defined values.
///
/// Candles contribute their close at `close_time`; line and point series
/// contribute their defined values and skip gaps. The first output appears at
/// the `range`-th defined input. A zero `range` yields nothing.
#[must_use]
pub fn simple_moving_average(series: &Series, range: usize) -> Vec<SeriesPoint> {
    if range == 0 {
        return Vec::new();
    }

    let samples: Vec<(f64, f64)> = match series {
        Series::Line(line) => defined_samples(&line.points),
        Series::Point(point) => defined_samples(&point.points),
        Series::Candle(candle) => candle
            .points
            .iter()
            .map(|candle| (candle.close_time, candle.close))
            .collect(),
    };

    let mut window = VecDeque::with_capacity(range);
    let mut sum = 0.0;
    let mut averages = Vec::with_capacity(samples.len().saturating_sub(range - 1));
    for (time, value) in samples {
        window.push_back(value);
        sum += value;
        if window.len() > range {
            if let Some(evicted) = window.pop_front() {
                sum -= evicted;
            }
        }
        if window.len() == range {
            averages.push(SeriesPoint::new(time, sum / range as f64));
        }
    }
    averages
}

fn defined_samples(points: &[SeriesPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter_map(|point| point.defined_value().map(|value| (point.time, value)))
        .collect()
}
