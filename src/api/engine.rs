use indexmap::IndexSet;
use tracing::debug;

use crate::core::{EstimatedTextMeasurer, SeriesId, TextMeasurer, Viewport};
use crate::error::ChartResult;
use crate::interaction::{AxesSnapshot, InteractionMode, MousePosition, ViewportState};
use crate::render::Renderer;

use super::chart_inputs::RedrawKey;
use super::overlay_cache::OverlayCache;
use super::{ChartEngineConfig, ChartLayout};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

type ViewportCallback = Box<dyn FnMut(&Viewport)>;

/// Pointer capabilities granted by the most recent inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct PointerCapabilities {
    pub(super) mouse_over: bool,
    pub(super) pan_and_zoom: bool,
}

/// Main orchestration facade consumed by host applications.
///
/// The host calls [`ChartEngine::frame`] whenever its inputs may have changed
/// and forwards pointer events to the `pointer_*` methods. The engine owns the
/// viewport between gestures and reports it through the viewport callback when
/// a gesture completes.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) measurer: Box<dyn TextMeasurer>,
    pub(super) state: ViewportState,
    pub(super) host_viewport: Option<Viewport>,
    pub(super) last_axes: Option<AxesSnapshot>,
    pub(super) last_layout: Option<ChartLayout>,
    pub(super) last_redraw_key: Option<RedrawKey>,
    pub(super) force_redraw: bool,
    pub(super) overlay_cache: OverlayCache,
    pub(super) disabled_series: IndexSet<SeriesId>,
    pub(super) capabilities: PointerCapabilities,
    pub(super) on_change_viewport: Option<ViewportCallback>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            measurer: Box::new(EstimatedTextMeasurer),
            state: ViewportState::default(),
            host_viewport: None,
            last_axes: None,
            last_layout: None,
            last_redraw_key: None,
            force_redraw: true,
            overlay_cache: OverlayCache::default(),
            disabled_series: IndexSet::new(),
            capabilities: PointerCapabilities {
                mouse_over: true,
                pan_and_zoom: true,
            },
            on_change_viewport: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartEngineConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        self.force_redraw = true;
        Ok(())
    }

    /// Replaces the label width estimator, e.g. with real font metrics.
    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.measurer = Box::new(measurer);
        self.force_redraw = true;
    }

    /// Registers the callback invoked once per completed gesture.
    pub fn set_on_change_viewport(&mut self, callback: impl FnMut(&Viewport) + 'static) {
        self.on_change_viewport = Some(Box::new(callback));
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.state.viewport()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.state.mode()
    }

    #[must_use]
    pub fn mouse_position(&self) -> Option<MousePosition> {
        self.state.mouse()
    }

    /// Layout of the last drawn frame.
    #[must_use]
    pub fn last_layout(&self) -> Option<&ChartLayout> {
        self.last_layout.as_ref()
    }

    /// Shows or hides one series (host series or overlay) by id.
    ///
    /// Hidden series are excluded from auto-fit, drawing, callouts and
    /// readouts. Returns whether the visibility changed.
    pub fn set_series_enabled(&mut self, id: impl Into<SeriesId>, enabled: bool) -> bool {
        let id = id.into();
        let changed = if enabled {
            self.disabled_series.shift_remove(&id)
        } else {
            self.disabled_series.insert(id.clone())
        };
        if changed {
            debug!(series = %id, enabled, "series visibility changed");
            self.force_redraw = true;
        }
        changed
    }

    #[must_use]
    pub fn is_series_enabled(&self, id: &SeriesId) -> bool {
        !self.disabled_series.contains(id)
    }

    /// Ids of hidden series in the order they were hidden.
    pub fn disabled_series(&self) -> impl Iterator<Item = &SeriesId> {
        self.disabled_series.iter()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Renders the current inputs into an external cairo context.
    ///
    /// Always draws; redraw skipping only applies to [`ChartEngine::frame`].
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        inputs: &super::ChartInputs,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        if !inputs.size.is_valid() {
            return Ok(());
        }
        self.overlay_cache.refresh(&inputs.series, &inputs.overlays);
        let layout = self.compute_layout(inputs);
        let frame = self.build_render_frame(inputs, &layout);
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.last_axes = Some(layout.axes_snapshot());
        self.last_layout = Some(layout);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
