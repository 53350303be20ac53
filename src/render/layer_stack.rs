use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Series,
    Overlay,
    Crosshair,
    Axis,
}

impl CanvasLayerKind {
    /// Layers whose content stays inside the plot rectangle.
    #[must_use]
    pub fn is_plot_clipped(self) -> bool {
        matches!(self, Self::Grid | Self::Series | Self::Overlay)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LayerStack {
    /// Back-to-front paint order: series above grid, axes and labels on top.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Background,
                CanvasLayerKind::Grid,
                CanvasLayerKind::Series,
                CanvasLayerKind::Overlay,
                CanvasLayerKind::Crosshair,
                CanvasLayerKind::Axis,
            ],
        }
    }
}
