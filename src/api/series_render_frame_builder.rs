use crate::core::{
    CandleSeries, LineSeries, PointSeries, Series, candles_in_time_window, in_draw_order,
    project_candles, project_line_paths, project_point_markers,
};
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    RenderFrame, Renderer,
};

use super::{ChartEngine, ChartEngineConfig, ChartLayout};

/// Colour identifying a series in callouts over `x_domain`.
///
/// Candles take the direction of the last candle in the window, the one the
/// callout value comes from.
pub(super) fn series_color(
    series: &Series,
    config: &ChartEngineConfig,
    x_domain: (f64, f64),
) -> Color {
    match series {
        Series::Line(line) => line.color,
        Series::Point(point) => point.color,
        Series::Candle(candles) => {
            match candles_in_time_window(&candles.points, x_domain.0, x_domain.1).last() {
                Some(candle) if !candle.is_bullish() => config.candle_down_color,
                _ => config.candle_up_color,
            }
        }
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Appends `series` to `layer` in ascending priority.
    pub(super) fn append_series_primitives(
        &self,
        frame: &mut RenderFrame,
        layer: CanvasLayerKind,
        series: &[&Series],
        layout: &ChartLayout,
    ) {
        if layout.plot.is_empty() {
            return;
        }
        for series in in_draw_order(series.iter().copied()) {
            match series {
                Series::Line(line) => self.append_line_series(frame, layer, line, layout),
                Series::Point(point) => self.append_point_series(frame, layer, point, layout),
                Series::Candle(candles) => self.append_candle_series(frame, layer, candles, layout),
            }
        }
    }

    fn append_line_series(
        &self,
        frame: &mut RenderFrame,
        layer: CanvasLayerKind,
        line: &LineSeries,
        layout: &ChartLayout,
    ) {
        let x_scale = layout.x_axis.scale;
        let y_scale = layout.y_axis.scale;
        let paths = project_line_paths(&line.points, line.staircase, x_scale, y_scale, layout.x_domain);

        // Fill first so every stroke stays on top of every fill.
        if line.filled {
            let baseline = y_scale.scale(0.0).clamp(0.0, layout.plot.height);
            let fill = line.color.with_alpha(line.color.alpha * self.config.fill_alpha);
            for polygon in paths.iter().filter_map(|path| path.fill_polygon(baseline)) {
                frame.push(layer, PolygonPrimitive::filled(polygon, fill));
            }
        }
        for path in paths {
            frame.push(
                layer,
                PolylinePrimitive::new(path.points, line.line_width, line.color),
            );
        }
    }

    fn append_point_series(
        &self,
        frame: &mut RenderFrame,
        layer: CanvasLayerKind,
        point: &PointSeries,
        layout: &ChartLayout,
    ) {
        let markers = project_point_markers(
            &point.points,
            layout.x_axis.scale,
            layout.y_axis.scale,
            layout.x_domain,
            self.config.point_marker_half_size_px,
        );
        let fill = point.color.with_alpha(point.color.alpha * self.config.fill_alpha);
        for marker in markers {
            frame.push(
                layer,
                PolygonPrimitive::filled(marker.corners().to_vec(), fill).with_stroke(point.color, 1.0),
            );
        }
    }

    fn append_candle_series(
        &self,
        frame: &mut RenderFrame,
        layer: CanvasLayerKind,
        candles: &CandleSeries,
        layout: &ChartLayout,
    ) {
        let config = &self.config;
        let visible = candles_in_time_window(&candles.points, layout.x_domain.0, layout.x_domain.1);
        let geometries = project_candles(
            visible,
            layout.x_axis.scale,
            layout.y_axis.scale,
            config.min_candle_body_width_px,
        );

        for candle in geometries {
            let color = if candle.is_bullish {
                config.candle_up_color
            } else {
                config.candle_down_color
            };
            frame.push(
                layer,
                LinePrimitive::new(
                    candle.center_x,
                    candle.wick_top,
                    candle.center_x,
                    candle.wick_bottom,
                    config.candle_wick_width_px,
                    color,
                ),
            );
            if let Some(body) = candle.body {
                // Doji bodies still get a visible hairline.
                let height = (body.bottom - body.top).max(1.0);
                frame.push(
                    layer,
                    RectPrimitive::new(body.left, body.top, body.right - body.left, height, color),
                );
            }
        }
    }
}
