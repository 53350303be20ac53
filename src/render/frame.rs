use crate::core::{CanvasSize, PlotRegion};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, LayerStack, LinePrimitive, PolygonPrimitive, PolylinePrimitive,
    RectPrimitive, TextPrimitive,
};

/// Clip rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line(LinePrimitive),
    Polyline(PolylinePrimitive),
    Polygon(PolygonPrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Polyline(polyline) => polyline.validate(),
            Self::Polygon(polygon) => polygon.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

impl From<LinePrimitive> for DrawCommand {
    fn from(value: LinePrimitive) -> Self {
        Self::Line(value)
    }
}

impl From<PolylinePrimitive> for DrawCommand {
    fn from(value: PolylinePrimitive) -> Self {
        Self::Polyline(value)
    }
}

impl From<PolygonPrimitive> for DrawCommand {
    fn from(value: PolygonPrimitive) -> Self {
        Self::Polygon(value)
    }
}

impl From<RectPrimitive> for DrawCommand {
    fn from(value: RectPrimitive) -> Self {
        Self::Rect(value)
    }
}

impl From<TextPrimitive> for DrawCommand {
    fn from(value: TextPrimitive) -> Self {
        Self::Text(value)
    }
}

/// Commands of one canvas layer, painted in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayer {
    pub kind: CanvasLayerKind,
    pub clip: Option<ClipRect>,
    pub commands: Vec<DrawCommand>,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers follow [`LayerStack::canonical`]; backends paint them in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub size: CanvasSize,
    pub layers: Vec<FrameLayer>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: CanvasSize) -> Self {
        let layers = LayerStack::canonical()
            .layers
            .into_iter()
            .map(|kind| FrameLayer {
                kind,
                clip: None,
                commands: Vec::new(),
            })
            .collect();
        Self { size, layers }
    }

    /// Clips grid, series and overlay layers to the plot rectangle at the
    /// canvas origin.
    #[must_use]
    pub fn with_plot_clip(mut self, plot: PlotRegion) -> Self {
        let clip = ClipRect {
            x: 0.0,
            y: 0.0,
            width: plot.width,
            height: plot.height,
        };
        for layer in &mut self.layers {
            if layer.kind.is_plot_clipped() {
                layer.clip = Some(clip);
            }
        }
        self
    }

    pub fn push(&mut self, kind: CanvasLayerKind, command: impl Into<DrawCommand>) {
        if let Some(layer) = self.layers.iter_mut().find(|layer| layer.kind == kind) {
            layer.commands.push(command.into());
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&FrameLayer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// All commands in paint order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.layers.iter().flat_map(|layer| layer.commands.iter())
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.commands.len()).sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.size.is_valid() {
            return Err(ChartError::InvalidCanvasSize {
                width: self.size.width,
                height: self.size.height,
            });
        }
        for command in self.commands() {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.commands.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawCommand, RenderFrame};
    use crate::core::{CanvasSize, PlotRegion};
    use crate::render::{CanvasLayerKind, Color, LinePrimitive, TextHAlign, TextPrimitive};

    #[test]
    fn commands_flatten_in_layer_order() {
        let mut frame = RenderFrame::new(CanvasSize::new(100, 50));
        frame.push(
            CanvasLayerKind::Axis,
            TextPrimitive::new("x", 2.0, 4.0, 10.0, Color::rgb(1.0, 1.0, 1.0), TextHAlign::Right),
        );
        frame.push(
            CanvasLayerKind::Series,
            LinePrimitive::new(0.0, 2.0, 5.0, 3.0, 1.0, Color::rgb(0.8, 0.2, 0.2)),
        );
        frame.push(
            CanvasLayerKind::Grid,
            LinePrimitive::new(0.0, 1.0, 5.0, 1.0, 1.0, Color::rgb(0.2, 0.2, 0.2)),
        );

        let ys: Vec<f64> = frame
            .commands()
            .filter_map(|command| match command {
                DrawCommand::Line(line) => Some(line.y1),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![1.0, 2.0]);
        assert_eq!(frame.command_count(), 3);
    }

    #[test]
    fn plot_clip_skips_axis_layer() {
        let frame = RenderFrame::new(CanvasSize::new(100, 50))
            .with_plot_clip(PlotRegion::new(80.0, 40.0));
        assert!(frame.layer(CanvasLayerKind::Series).and_then(|l| l.clip).is_some());
        assert!(frame.layer(CanvasLayerKind::Axis).and_then(|l| l.clip).is_none());
    }
}
