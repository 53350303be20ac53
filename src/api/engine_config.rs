use serde::{Deserialize, Serialize};

use crate::core::time_ticks::DEFAULT_TIME_TICK_SLOT_PX;
use crate::core::value_ticks::DEFAULT_VALUE_TICK_SPACING_PX;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Style and tuning shared by every frame.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Missing fields fall back to
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartEngineConfig {
    pub font_size_px: f64,
    pub label_padding_px: f64,
    /// Pixels reserved per time tick when choosing the time interval.
    pub time_tick_slot_px: f64,
    /// Pixels per value tick when choosing the tick count.
    pub value_tick_spacing_px: f64,
    /// Share of the plot height kept free above and below auto-fitted values.
    pub y_margin_ratio: f64,
    pub fill_alpha: f64,
    pub point_marker_half_size_px: f64,
    /// Candle bodies narrower than this are drawn as wicks only.
    pub min_candle_body_width_px: f64,
    pub candle_wick_width_px: f64,
    pub grid_line_width_px: f64,
    pub dash_px: f64,
    pub dash_gap_px: f64,
    pub background_color: Color,
    pub grid_color: Color,
    pub axis_color: Color,
    pub label_color: Color,
    pub crosshair_color: Color,
    pub crosshair_label_background_color: Color,
    pub crosshair_label_text_color: Color,
    pub callout_text_color: Color,
    pub candle_up_color: Color,
    pub candle_down_color: Color,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            font_size_px: 11.0,
            label_padding_px: 6.0,
            time_tick_slot_px: DEFAULT_TIME_TICK_SLOT_PX,
            value_tick_spacing_px: DEFAULT_VALUE_TICK_SPACING_PX,
            y_margin_ratio: 0.05,
            fill_alpha: 0.2,
            point_marker_half_size_px: 4.0,
            min_candle_body_width_px: 3.0,
            candle_wick_width_px: 1.0,
            grid_line_width_px: 1.0,
            dash_px: 4.0,
            dash_gap_px: 3.0,
            background_color: Color::rgb(1.0, 1.0, 1.0),
            grid_color: Color::rgba(0.0, 0.0, 0.0, 0.08),
            axis_color: Color::rgb(0.62, 0.64, 0.68),
            label_color: Color::rgb(0.36, 0.38, 0.42),
            crosshair_color: Color::rgba(0.2, 0.2, 0.25, 0.6),
            crosshair_label_background_color: Color::rgb(0.2, 0.2, 0.25),
            crosshair_label_text_color: Color::rgb(1.0, 1.0, 1.0),
            callout_text_color: Color::rgb(1.0, 1.0, 1.0),
            candle_up_color: Color::rgb(0.149, 0.651, 0.604),
            candle_down_color: Color::rgb(0.937, 0.325, 0.314),
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_y_margin_ratio(mut self, y_margin_ratio: f64) -> Self {
        self.y_margin_ratio = y_margin_ratio;
        self
    }

    #[must_use]
    pub fn with_candle_colors(mut self, up: Color, down: Color) -> Self {
        self.candle_up_color = up;
        self.candle_down_color = down;
        self
    }

    /// Dash pattern used by current-value callout lines.
    #[must_use]
    pub fn callout_stroke_style(&self) -> LineStrokeStyle {
        LineStrokeStyle::Dashed {
            dash_px: self.dash_px,
            gap_px: self.dash_gap_px,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("font_size_px", self.font_size_px),
            ("time_tick_slot_px", self.time_tick_slot_px),
            ("value_tick_spacing_px", self.value_tick_spacing_px),
            ("point_marker_half_size_px", self.point_marker_half_size_px),
            ("candle_wick_width_px", self.candle_wick_width_px),
            ("grid_line_width_px", self.grid_line_width_px),
            ("dash_px", self.dash_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("label_padding_px", self.label_padding_px),
            ("min_candle_body_width_px", self.min_candle_body_width_px),
            ("dash_gap_px", self.dash_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.y_margin_ratio.is_finite() || !(0.0..0.5).contains(&self.y_margin_ratio) {
            return Err(ChartError::InvalidData(
                "`y_margin_ratio` must be finite and in [0, 0.5)".to_owned(),
            ));
        }
        if !self.fill_alpha.is_finite() || !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(ChartError::InvalidData(
                "`fill_alpha` must be finite and in [0, 1]".to_owned(),
            ));
        }
        for color in [
            self.background_color,
            self.grid_color,
            self.axis_color,
            self.label_color,
            self.crosshair_color,
            self.crosshair_label_background_color,
            self.crosshair_label_text_color,
            self.callout_text_color,
            self.candle_up_color,
            self.candle_down_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
