use crate::core::ScaleMode;

/// New X domain after dragging the time gutter, keeping `anchor_time` under
/// the pointer at `pointer_x`.
///
/// The right edge stays fixed. Returns `None` when the pointer reaches the
/// right edge of the plot or the solved left edge would not stay left of the
/// right edge.
#[must_use]
pub fn zoom_x_anchored(
    domain: (f64, f64),
    anchor_time: f64,
    pointer_x: f64,
    plot_width: f64,
) -> Option<(f64, f64)> {
    let (_, right) = domain;
    let denominator = plot_width - pointer_x;
    if !denominator.is_finite() || denominator <= 0.0 {
        return None;
    }
    let left = (anchor_time * plot_width - right * pointer_x) / denominator;
    (left.is_finite() && left < right).then_some((left, right))
}

/// New Y domain after dragging the value gutter by `dy` pixels.
///
/// The domain is scaled about its midpoint by `1 + 2·dy / plot_height` in the
/// scale mode's transformed space, so dragging down zooms out.
#[must_use]
pub fn zoom_y_symmetric(
    domain: (f64, f64),
    mode: ScaleMode,
    dy: f64,
    plot_height: f64,
) -> Option<(f64, f64)> {
    if plot_height <= 0.0 {
        return None;
    }
    let factor = 1.0 + 2.0 * dy / plot_height;
    if !factor.is_finite() || factor <= 0.0 {
        return None;
    }
    let low = mode.transform(domain.0);
    let high = mode.transform(domain.1);
    let middle = (low + high) / 2.0;
    let half = (high - low) / 2.0 * factor;
    finite_ordered((mode.untransform(middle - half), mode.untransform(middle + half)))
}

/// Translates the X domain so content follows a drag of `dx` pixels.
#[must_use]
pub fn pan_x(domain: (f64, f64), dx: f64, plot_width: f64) -> Option<(f64, f64)> {
    if plot_width <= 0.0 {
        return None;
    }
    let shift = -dx * (domain.1 - domain.0) / plot_width;
    finite_ordered((domain.0 + shift, domain.1 + shift))
}

/// Translates the Y domain in transformed space so content follows a drag of
/// `dy` pixels (pixel Y grows downward).
#[must_use]
pub fn pan_y(domain: (f64, f64), mode: ScaleMode, dy: f64, plot_height: f64) -> Option<(f64, f64)> {
    if plot_height <= 0.0 {
        return None;
    }
    let low = mode.transform(domain.0);
    let high = mode.transform(domain.1);
    let shift = dy * (high - low) / plot_height;
    finite_ordered((mode.untransform(low + shift), mode.untransform(high + shift)))
}

fn finite_ordered(domain: (f64, f64)) -> Option<(f64, f64)> {
    (domain.0.is_finite() && domain.1.is_finite() && domain.0 < domain.1).then_some(domain)
}
