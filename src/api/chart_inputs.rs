use std::sync::Arc;

use crate::core::{CanvasSize, Series, Viewport};
use crate::extensions::OverlaySpec;
use crate::interaction::MousePosition;

/// Everything the host supplies for one render cycle.
///
/// `series` and `overlays` are immutable snapshots; hand over a new `Arc` to
/// change them. Redraw detection compares them by pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInputs {
    pub size: CanvasSize,
    pub series: Arc<[Series]>,
    pub overlays: Arc<[OverlaySpec]>,
    pub viewport: Viewport,
    pub show_axes: bool,
    pub show_grid: bool,
    pub show_labels: bool,
    pub show_current_values: bool,
    pub enable_mouse_over: bool,
    pub enable_pan_and_zoom: bool,
    /// Replaces value labels with a fixed mask.
    pub privacy: bool,
}

impl ChartInputs {
    #[must_use]
    pub fn new(size: CanvasSize, series: impl Into<Arc<[Series]>>) -> Self {
        Self {
            size,
            series: series.into(),
            overlays: Arc::from(Vec::new()),
            viewport: Viewport::default(),
            show_axes: true,
            show_grid: true,
            show_labels: true,
            show_current_values: true,
            enable_mouse_over: true,
            enable_pan_and_zoom: true,
            privacy: false,
        }
    }

    #[must_use]
    pub fn with_overlays(mut self, overlays: impl Into<Arc<[OverlaySpec]>>) -> Self {
        self.overlays = overlays.into();
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_show_axes(mut self, show_axes: bool) -> Self {
        self.show_axes = show_axes;
        self
    }

    #[must_use]
    pub fn with_show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    #[must_use]
    pub fn with_show_current_values(mut self, show_current_values: bool) -> Self {
        self.show_current_values = show_current_values;
        self
    }

    #[must_use]
    pub fn with_mouse_over(mut self, enable_mouse_over: bool) -> Self {
        self.enable_mouse_over = enable_mouse_over;
        self
    }

    #[must_use]
    pub fn with_pan_and_zoom(mut self, enable_pan_and_zoom: bool) -> Self {
        self.enable_pan_and_zoom = enable_pan_and_zoom;
        self
    }

    #[must_use]
    pub fn with_privacy(mut self, privacy: bool) -> Self {
        self.privacy = privacy;
        self
    }
}

/// What a drawn frame depended on.
#[derive(Debug, Clone)]
pub struct RedrawKey {
    pub size: CanvasSize,
    pub show_axes: bool,
    pub show_grid: bool,
    pub show_labels: bool,
    pub show_current_values: bool,
    pub privacy: bool,
    pub series: Arc<[Series]>,
    pub overlays: Arc<[OverlaySpec]>,
    pub viewport: Viewport,
    pub mouse: Option<MousePosition>,
}

impl RedrawKey {
    /// Captures `inputs` together with the engine-owned viewport and mouse.
    #[must_use]
    pub fn capture(inputs: &ChartInputs, viewport: Viewport, mouse: Option<MousePosition>) -> Self {
        Self {
            size: inputs.size,
            show_axes: inputs.show_axes,
            show_grid: inputs.show_grid,
            show_labels: inputs.show_labels,
            show_current_values: inputs.show_current_values,
            privacy: inputs.privacy,
            series: Arc::clone(&inputs.series),
            overlays: Arc::clone(&inputs.overlays),
            viewport,
            mouse,
        }
    }

    fn same_as(&self, other: &Self) -> bool {
        self.size == other.size
            && self.show_axes == other.show_axes
            && self.show_grid == other.show_grid
            && self.show_labels == other.show_labels
            && self.show_current_values == other.show_current_values
            && self.privacy == other.privacy
            && Arc::ptr_eq(&self.series, &other.series)
            && Arc::ptr_eq(&self.overlays, &other.overlays)
            && self.viewport == other.viewport
            && self.mouse == other.mouse
    }
}

/// Shallow comparison deciding whether a new frame must be drawn.
///
/// Series and overlay snapshots compare by identity, so an equal but freshly
/// allocated snapshot still redraws.
#[must_use]
pub fn should_redraw(previous: Option<&RedrawKey>, next: &RedrawKey) -> bool {
    previous.is_none_or(|previous| !previous.same_as(next))
}
