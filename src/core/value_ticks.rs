use crate::core::scale::nice_ticks;
use crate::core::{Scale, ScaleMode};

pub const DEFAULT_VALUE_TICK_SPACING_PX: f64 = 50.0;

/// Target tick count for an axis of `axis_span_px` pixels.
#[must_use]
pub fn value_tick_count(axis_span_px: f64, spacing_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 || spacing_px <= 0.0 {
        return 0;
    }
    ((axis_span_px / spacing_px).floor() as usize).max(1)
}

/// Tick values for the value axis, ascending and one per rounded pixel.
///
/// Linear scales subdivide the domain with nice numbers. Symmetric-log scales
/// subdivide the pixel range instead and invert each position, which keeps
/// the ticks visually evenly spaced.
#[must_use]
pub fn value_ticks(scale: Scale, spacing_px: f64) -> Vec<f64> {
    let (range_start, range_end) = scale.range();
    let count = value_tick_count((range_end - range_start).abs(), spacing_px);
    if count == 0 {
        return Vec::new();
    }

    let mut values: Vec<f64> = match scale.mode() {
        ScaleMode::Linear => scale.ticks(count),
        ScaleMode::Logarithmic => nice_ticks(range_start, range_end, count)
            .into_iter()
            .map(|pixel| scale.invert(pixel))
            .collect(),
    };
    values.retain(|value| value.is_finite());
    values.sort_by(f64::total_cmp);

    let mut last_px: Option<i64> = None;
    values.retain(|value| {
        let px = scale.scale(*value).round() as i64;
        let keep = last_px != Some(px);
        last_px = Some(px);
        keep
    });
    values
}
