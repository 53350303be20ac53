use serde::{Deserialize, Serialize};

use crate::core::label_format::{REDACTED_LABEL, format_value};
use crate::core::time_ticks::time_ticks;
use crate::core::value_ticks::value_ticks;
use crate::core::{CanvasSize, PlotRegion, Scale, ScaleMode};

/// One labeled axis position. `highlighted` marks a coarser calendar boundary
/// and is drawn in bold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    pub highlighted: bool,
}

/// Renderable axis: its scale, ticks and the pixels reserved for labels
/// (height for the time axis, width for the value axis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub scale: Scale,
    pub ticks: Vec<Tick>,
    pub extent_px: f64,
    pub label_padding_px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub shown: bool,
    pub font_size_px: f64,
    pub label_padding_px: f64,
    /// Target gap between ticks: the slot size for time ticks, the pixels per
    /// tick for value ticks.
    pub tick_spacing_px: f64,
    pub redact_labels: bool,
}

/// Measures rendered label width; backends with real font metrics can plug in
/// their own.
pub trait TextMeasurer {
    fn text_width_px(&self, text: &str, font_size_px: f64) -> f64;
}

/// Deterministic, backend-independent width estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn text_width_px(&self, text: &str, font_size_px: f64) -> f64 {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        (units * font_size_px).max(font_size_px)
    }
}

/// Height reserved below the plot for time labels.
#[must_use]
pub fn time_axis_height(style: AxisStyle) -> f64 {
    if style.shown {
        style.font_size_px + 2.0 * style.label_padding_px
    } else {
        0.0
    }
}

/// Builds the value (Y) axis over a plot of `plot_height` pixels; pixel 0 is
/// the top of the plot.
#[must_use]
pub fn build_value_axis(
    domain: (f64, f64),
    mode: ScaleMode,
    plot_height: f64,
    style: AxisStyle,
    measurer: &dyn TextMeasurer,
) -> Axis {
    let scale = Scale::new(mode, domain, (plot_height, 0.0));
    let values = value_ticks(scale, style.tick_spacing_px);
    let step = match mode {
        ScaleMode::Linear => values.windows(2).next().map(|pair| pair[1] - pair[0]),
        ScaleMode::Logarithmic => None,
    };

    let labels: Vec<String> = values
        .iter()
        .map(|value| format_value(*value, step))
        .collect();

    // Sized from the real labels; redaction only swaps the drawn text.
    let extent_px = if style.shown {
        let widest = labels
            .iter()
            .map(|label| measurer.text_width_px(label, style.font_size_px))
            .fold(0.0, f64::max);
        widest + 2.0 * style.label_padding_px
    } else {
        0.0
    };

    let ticks: Vec<Tick> = values
        .into_iter()
        .zip(labels)
        .map(|(value, label)| Tick {
            value,
            label: if style.redact_labels {
                REDACTED_LABEL.to_owned()
            } else {
                label
            },
            highlighted: false,
        })
        .collect();

    Axis {
        scale,
        ticks,
        extent_px,
        label_padding_px: style.label_padding_px,
    }
}

/// Builds the time (X) axis across a plot of `plot_width` pixels.
#[must_use]
pub fn build_time_axis(domain: (f64, f64), plot_width: f64, style: AxisStyle) -> Axis {
    let scale = Scale::linear(domain, (0.0, plot_width));
    Axis {
        scale,
        ticks: time_ticks(scale, style.tick_spacing_px),
        extent_px: time_axis_height(style),
        label_padding_px: style.label_padding_px,
    }
}

/// Both axes plus the plot region they leave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisPair {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub plot: PlotRegion,
}

/// Builds the axes in dependency order: the value axis width has to be known
/// before the time axis can span `canvas_width - y_axis_width`.
#[must_use]
pub fn build_axes(
    canvas: CanvasSize,
    x_domain: (f64, f64),
    y_domain: (f64, f64),
    mode: ScaleMode,
    x_style: AxisStyle,
    y_style: AxisStyle,
    measurer: &dyn TextMeasurer,
) -> AxisPair {
    let canvas_width = f64::from(canvas.width);
    let canvas_height = f64::from(canvas.height);
    let plot_height = (canvas_height - time_axis_height(x_style)).max(0.0);

    let y_axis = build_value_axis(y_domain, mode, plot_height, y_style, measurer);
    let plot_width = (canvas_width - y_axis.extent_px).max(0.0);
    let x_axis = build_time_axis(x_domain, plot_width, x_style);

    AxisPair {
        x_axis,
        y_axis,
        plot: PlotRegion::new(plot_width, plot_height),
    }
}
