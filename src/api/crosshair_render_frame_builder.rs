use crate::core::{REDACTED_LABEL, label_format::format_date, label_format::format_value};
use crate::interaction::MousePosition;
use crate::render::{
    CanvasLayerKind, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, TextVAlign,
};

use super::{ChartEngine, ChartInputs, ChartLayout};

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn append_crosshair_primitives(
        &self,
        frame: &mut RenderFrame,
        inputs: &ChartInputs,
        layout: &ChartLayout,
        mouse: MousePosition,
    ) {
        let plot = layout.plot;
        if !plot.contains(mouse.x, mouse.y) {
            return;
        }
        let config = &self.config;

        frame.push(
            CanvasLayerKind::Crosshair,
            LinePrimitive::new(mouse.x, 0.0, mouse.x, plot.height, 1.0, config.crosshair_color),
        );
        frame.push(
            CanvasLayerKind::Crosshair,
            LinePrimitive::new(0.0, mouse.y, plot.width, mouse.y, 1.0, config.crosshair_color),
        );

        if !inputs.show_labels {
            return;
        }
        let label_height = config.font_size_px + 2.0 * config.label_padding_px;

        if layout.x_axis.extent_px > 0.0 {
            let label = format_date(layout.x_axis.scale.invert(mouse.x));
            let width = self.measurer.text_width_px(&label, config.font_size_px)
                + 2.0 * config.label_padding_px;
            frame.push(
                CanvasLayerKind::Axis,
                RectPrimitive::new(
                    mouse.x - width / 2.0,
                    plot.height,
                    width,
                    label_height,
                    config.crosshair_label_background_color,
                ),
            );
            frame.push(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    label,
                    mouse.x,
                    plot.height + config.label_padding_px,
                    config.font_size_px,
                    config.crosshair_label_text_color,
                    TextHAlign::Center,
                ),
            );
        }

        if layout.y_axis.extent_px > 0.0 {
            let label = if inputs.privacy {
                REDACTED_LABEL.to_owned()
            } else {
                format_value(layout.y_axis.scale.invert(mouse.y), None)
            };
            frame.push(
                CanvasLayerKind::Axis,
                RectPrimitive::new(
                    plot.width,
                    mouse.y - label_height / 2.0,
                    layout.y_axis.extent_px,
                    label_height,
                    config.crosshair_label_background_color,
                ),
            );
            frame.push(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    label,
                    plot.width + layout.y_axis.label_padding_px,
                    mouse.y,
                    config.font_size_px,
                    config.crosshair_label_text_color,
                    TextHAlign::Left,
                )
                .with_v_align(TextVAlign::Middle),
            );
        }
    }
}
