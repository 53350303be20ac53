use crate::core::Series;
use crate::render::{
    CanvasLayerKind, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, TextVAlign,
};

use super::{ChartEngine, ChartInputs, ChartLayout};

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the full layered frame for `layout`.
    pub(super) fn build_render_frame(&self, inputs: &ChartInputs, layout: &ChartLayout) -> RenderFrame {
        let mut frame = RenderFrame::new(inputs.size).with_plot_clip(layout.plot);
        let config = &self.config;

        frame.push(
            CanvasLayerKind::Background,
            RectPrimitive::new(
                0.0,
                0.0,
                f64::from(inputs.size.width),
                f64::from(inputs.size.height),
                config.background_color,
            ),
        );

        if inputs.show_grid {
            self.append_grid_primitives(&mut frame, layout);
        }

        let host: Vec<&Series> = self.enabled_host_series(inputs).collect();
        self.append_series_primitives(&mut frame, CanvasLayerKind::Series, &host, layout);
        let overlays: Vec<&Series> = self.enabled_overlay_series().collect();
        self.append_series_primitives(&mut frame, CanvasLayerKind::Overlay, &overlays, layout);

        // Tags share the axis layer and must paint over tick labels.
        if inputs.show_axes {
            self.append_axis_primitives(&mut frame, inputs, layout);
        }
        if inputs.show_current_values {
            self.append_current_value_primitives(&mut frame, inputs, layout);
        }
        if let Some(mouse) = self.visible_mouse(inputs) {
            self.append_crosshair_primitives(&mut frame, inputs, layout, mouse);
        }
        frame
    }

    fn append_grid_primitives(&self, frame: &mut RenderFrame, layout: &ChartLayout) {
        let config = &self.config;
        let plot = layout.plot;
        for tick in &layout.x_axis.ticks {
            let x = layout.x_axis.scale.scale(tick.value);
            frame.push(
                CanvasLayerKind::Grid,
                LinePrimitive::new(x, 0.0, x, plot.height, config.grid_line_width_px, config.grid_color),
            );
        }
        for tick in &layout.y_axis.ticks {
            let y = layout.y_axis.scale.scale(tick.value);
            frame.push(
                CanvasLayerKind::Grid,
                LinePrimitive::new(0.0, y, plot.width, y, config.grid_line_width_px, config.grid_color),
            );
        }
    }

    fn append_axis_primitives(&self, frame: &mut RenderFrame, inputs: &ChartInputs, layout: &ChartLayout) {
        let config = &self.config;
        let plot = layout.plot;

        frame.push(
            CanvasLayerKind::Axis,
            LinePrimitive::new(0.0, plot.height, plot.width, plot.height, 1.0, config.axis_color),
        );
        frame.push(
            CanvasLayerKind::Axis,
            LinePrimitive::new(plot.width, 0.0, plot.width, plot.height, 1.0, config.axis_color),
        );

        if !inputs.show_labels {
            return;
        }

        let time_label_y = plot.height + layout.x_axis.label_padding_px;
        for tick in &layout.x_axis.ticks {
            let x = layout.x_axis.scale.scale(tick.value);
            frame.push(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    tick.label.as_str(),
                    x,
                    time_label_y,
                    config.font_size_px,
                    config.label_color,
                    TextHAlign::Center,
                )
                .with_bold(tick.highlighted),
            );
        }

        let value_label_x = plot.width + layout.y_axis.label_padding_px;
        for tick in &layout.y_axis.ticks {
            let y = layout.y_axis.scale.scale(tick.value);
            frame.push(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    tick.label.as_str(),
                    value_label_x,
                    y,
                    config.font_size_px,
                    config.label_color,
                    TextHAlign::Left,
                )
                .with_v_align(TextVAlign::Middle),
            );
        }
    }
}
