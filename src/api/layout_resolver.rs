use serde::{Deserialize, Serialize};

use crate::core::{
    Axis, AxisStyle, PlotRegion, Series, SeriesId, boundary_values, build_axes, in_draw_order,
    resolve_x_domain, resolve_y_domain,
};
use crate::interaction::AxesSnapshot;
use crate::render::Renderer;

use super::{ChartEngine, ChartInputs};

/// Latest in-window value of one series, shown as a dashed callout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentValue {
    pub series_id: SeriesId,
    pub value: f64,
    /// Pixel row of `value` inside the plot.
    pub y: f64,
}

/// Resolved geometry of one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub plot: PlotRegion,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub current_values: Vec<CurrentValue>,
}

impl ChartLayout {
    #[must_use]
    pub fn axes_snapshot(&self) -> AxesSnapshot {
        AxesSnapshot {
            x_scale: self.x_axis.scale,
            y_scale: self.y_axis.scale,
            plot: self.plot,
        }
    }

    #[must_use]
    pub fn current_value(&self, series_id: &SeriesId) -> Option<f64> {
        self.current_values
            .iter()
            .find(|current| current.series_id == *series_id)
            .map(|current| current.value)
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Resolves domains, axes and callouts for `inputs` without drawing.
    pub fn resolve_layout(&mut self, inputs: &ChartInputs) -> ChartLayout {
        self.overlay_cache.refresh(&inputs.series, &inputs.overlays);
        self.compute_layout(inputs)
    }

    pub(super) fn compute_layout(&self, inputs: &ChartInputs) -> ChartLayout {
        let viewport = self.state.viewport();
        let drawable: Vec<&Series> = self
            .enabled_host_series(inputs)
            .chain(self.enabled_overlay_series())
            .collect();

        let x_domain = resolve_x_domain(&viewport, drawable.iter().copied());
        let y_domain = resolve_y_domain(
            &viewport,
            drawable.iter().copied(),
            x_domain,
            self.config.y_margin_ratio,
        );

        let axes = build_axes(
            inputs.size,
            x_domain,
            y_domain,
            viewport.scale_mode,
            self.axis_style(inputs, self.config.time_tick_slot_px, false),
            self.axis_style(inputs, self.config.value_tick_spacing_px, inputs.privacy),
            self.measurer.as_ref(),
        );

        let current_values = in_draw_order(drawable.iter().copied())
            .into_iter()
            .filter_map(|series| {
                let value = boundary_values(series, x_domain.0, x_domain.1)
                    .end
                    .filter(|value| value.is_finite())?;
                Some(CurrentValue {
                    series_id: series.id().clone(),
                    value,
                    y: axes.y_axis.scale.scale(value),
                })
            })
            .collect();

        ChartLayout {
            x_axis: axes.x_axis,
            y_axis: axes.y_axis,
            plot: axes.plot,
            x_domain,
            y_domain,
            current_values,
        }
    }

    pub(super) fn enabled_host_series<'a>(
        &'a self,
        inputs: &'a ChartInputs,
    ) -> impl Iterator<Item = &'a Series> + 'a {
        inputs
            .series
            .iter()
            .filter(|series| !self.disabled_series.contains(series.id()))
    }

    pub(super) fn enabled_overlay_series(&self) -> impl Iterator<Item = &Series> {
        self.overlay_cache
            .derived()
            .iter()
            .filter(|series| !self.disabled_series.contains(series.id()))
    }

    fn axis_style(&self, inputs: &ChartInputs, tick_spacing_px: f64, redact: bool) -> AxisStyle {
        AxisStyle {
            shown: inputs.show_axes,
            font_size_px: self.config.font_size_px,
            label_padding_px: self.config.label_padding_px,
            tick_spacing_px,
            redact_labels: redact,
        }
    }
}
