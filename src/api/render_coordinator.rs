use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::interaction::MousePosition;
use crate::render::Renderer;

use super::chart_inputs::{RedrawKey, should_redraw};
use super::engine::PointerCapabilities;
use super::{ChartEngine, ChartInputs};

impl<R: Renderer> ChartEngine<R> {
    /// Runs one render cycle for `inputs`.
    ///
    /// Returns `Ok(true)` when a frame was drawn and `Ok(false)` when nothing
    /// relevant changed since the last frame or the canvas is empty.
    pub fn frame(&mut self, inputs: &ChartInputs) -> ChartResult<bool> {
        self.reconcile_host_viewport(inputs);
        self.capabilities = PointerCapabilities {
            mouse_over: inputs.enable_mouse_over,
            pan_and_zoom: inputs.enable_pan_and_zoom,
        };

        if !inputs.size.is_valid() {
            debug!(
                width = inputs.size.width,
                height = inputs.size.height,
                "frame skipped: empty canvas"
            );
            return Ok(false);
        }

        let key = RedrawKey::capture(inputs, self.state.viewport(), self.visible_mouse(inputs));
        if !self.force_redraw && !should_redraw(self.last_redraw_key.as_ref(), &key) {
            trace!("frame skipped: inputs unchanged");
            return Ok(false);
        }

        self.overlay_cache.refresh(&inputs.series, &inputs.overlays);
        let layout = self.compute_layout(inputs);
        let frame = self.build_render_frame(inputs, &layout);
        self.renderer.render(&frame)?;

        debug!(
            commands = frame.command_count(),
            plot_width = layout.plot.width,
            plot_height = layout.plot.height,
            "frame drawn"
        );
        self.last_axes = Some(layout.axes_snapshot());
        self.last_layout = Some(layout);
        self.last_redraw_key = Some(key);
        self.force_redraw = false;
        Ok(true)
    }

    fn reconcile_host_viewport(&mut self, inputs: &ChartInputs) {
        if self.host_viewport == Some(inputs.viewport) {
            return;
        }
        self.host_viewport = Some(inputs.viewport);
        if self.state.adopt_host_viewport(inputs.viewport) {
            debug!("host viewport adopted");
        } else {
            debug!("host viewport deferred: gesture in progress");
        }
    }

    pub(super) fn visible_mouse(&self, inputs: &ChartInputs) -> Option<MousePosition> {
        self.state.mouse().filter(|_| inputs.enable_mouse_over)
    }
}
