use tracing::debug;

use crate::core::Viewport;
use crate::interaction::{InteractionMode, PointerEvent};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Starts a pan/zoom gesture at canvas position `(x, y)`.
    ///
    /// Ignored while pan and zoom are disabled or before the first frame.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if !self.capabilities.pan_and_zoom {
            return;
        }
        self.dispatch_pointer_event(PointerEvent::Start { x, y });
    }

    /// Updates the active gesture, or the hover position when idle.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        match self.state.mode() {
            InteractionMode::Panning => {
                self.dispatch_pointer_event(PointerEvent::Move { x, y });
            }
            InteractionMode::Idle if self.capabilities.mouse_over => {
                self.dispatch_pointer_event(PointerEvent::Hover { x, y });
            }
            InteractionMode::Idle => {}
        }
    }

    /// Ends the gesture; returns the viewport reported to the host, if any.
    pub fn pointer_up(&mut self) -> Option<Viewport> {
        self.dispatch_pointer_event(PointerEvent::End)
    }

    pub fn pointer_cancel(&mut self) -> Option<Viewport> {
        self.dispatch_pointer_event(PointerEvent::Cancel)
    }

    /// Pointer left the canvas: hides the crosshair and ends any gesture.
    pub fn pointer_leave(&mut self) -> Option<Viewport> {
        self.dispatch_pointer_event(PointerEvent::Leave)
    }

    fn dispatch_pointer_event(&mut self, event: PointerEvent) -> Option<Viewport> {
        let reduced = self.state.reduce(event, self.last_axes.as_ref());
        self.state = reduced.state;
        let completed = reduced.completed?;

        debug!(
            x_domain = ?completed.x_domain,
            y_domain = ?completed.y_domain,
            "viewport reported to host"
        );
        if let Some(callback) = self.on_change_viewport.as_mut() {
            callback(&completed);
        }
        Some(completed)
    }
}
