use crate::core::{REDACTED_LABEL, label_format::format_value};
use crate::render::{
    CanvasLayerKind, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, TextVAlign,
};

use super::series_render_frame_builder::series_color;
use super::{ChartEngine, ChartInputs, ChartLayout};

impl<R: Renderer> ChartEngine<R> {
    /// Dashed line across the plot at each series' latest in-window value,
    /// with a value tag in the Y gutter.
    pub(super) fn append_current_value_primitives(
        &self,
        frame: &mut RenderFrame,
        inputs: &ChartInputs,
        layout: &ChartLayout,
    ) {
        let config = &self.config;
        let plot = layout.plot;
        let gutter_width = layout.y_axis.extent_px;
        let tag_height = config.font_size_px + config.label_padding_px;

        for current in &layout.current_values {
            if !(0.0..=plot.height).contains(&current.y) {
                continue;
            }
            let Some(series) = inputs
                .series
                .iter()
                .chain(self.overlay_cache.derived())
                .find(|series| *series.id() == current.series_id)
            else {
                continue;
            };
            let color = series_color(series, config, layout.x_domain);

            frame.push(
                CanvasLayerKind::Overlay,
                LinePrimitive::new(0.0, current.y, plot.width, current.y, 1.0, color)
                    .with_stroke_style(config.callout_stroke_style()),
            );

            if gutter_width <= 0.0 || !inputs.show_labels {
                continue;
            }
            let label = if inputs.privacy {
                REDACTED_LABEL.to_owned()
            } else {
                format_value(current.value, None)
            };
            frame.push(
                CanvasLayerKind::Axis,
                RectPrimitive::new(
                    plot.width,
                    current.y - tag_height / 2.0,
                    gutter_width,
                    tag_height,
                    color,
                )
                .with_corner_radius(2.0),
            );
            frame.push(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    label,
                    plot.width + layout.y_axis.label_padding_px,
                    current.y,
                    config.font_size_px,
                    config.callout_text_color,
                    TextHAlign::Left,
                )
                .with_v_align(TextVAlign::Middle)
                .with_bold(true),
            );
        }
    }
}
