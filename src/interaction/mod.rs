mod gesture_math;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{PlotRegion, Scale, Viewport};

pub use gesture_math::{pan_x, pan_y, zoom_x_anchored, zoom_y_symmetric};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Region a gesture starts in; it fixes the gesture's behavior until it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureZone {
    /// Value gutter right of the plot: symmetric Y zoom.
    YAxis,
    /// Time gutter below the plot: anchored X zoom.
    XAxis,
    /// Plot area: pan.
    Plot,
}

impl GestureZone {
    /// The value gutter wins where both gutters meet.
    #[must_use]
    pub fn classify(plot: PlotRegion, x: f64, y: f64) -> Self {
        if x >= plot.width {
            Self::YAxis
        } else if y >= plot.height {
            Self::XAxis
        } else {
            Self::Plot
        }
    }
}

/// Scales and plot region of a drawn frame, kept for hit-testing gestures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxesSnapshot {
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub plot: PlotRegion,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MousePosition {
    pub x: f64,
    pub y: f64,
}

/// State frozen when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSnapshot {
    pub start: MousePosition,
    pub zone: GestureZone,
    pub viewport: Viewport,
    pub axes: AxesSnapshot,
}

/// Pointer input in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Start { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    End,
    Cancel,
    Hover { x: f64, y: f64 },
    Leave,
}

/// Engine-owned viewport plus gesture and hover state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    mode: InteractionMode,
    viewport: Viewport,
    gesture: Option<GestureSnapshot>,
    mouse: Option<MousePosition>,
}

/// Result of one reducer step. `completed` carries the viewport to report to
/// the host when a gesture has just ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduced {
    pub state: ViewportState,
    pub completed: Option<Viewport>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ViewportState {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            mode: InteractionMode::Idle,
            viewport,
            gesture: None,
            mouse: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn gesture(&self) -> Option<GestureSnapshot> {
        self.gesture
    }

    #[must_use]
    pub fn mouse(&self) -> Option<MousePosition> {
        self.mouse
    }

    /// Replaces the viewport with a host-provided one unless a gesture is in
    /// flight. Returns whether it was adopted.
    pub fn adopt_host_viewport(&mut self, viewport: Viewport) -> bool {
        if self.mode == InteractionMode::Panning {
            return false;
        }
        self.viewport = viewport;
        true
    }

    /// Applies one pointer event.
    ///
    /// `axes` is the previous frame's geometry; a gesture cannot start without
    /// it. Moves are always measured against the gesture's start position and
    /// snapshot, so repeated updates do not accumulate error.
    #[must_use]
    pub fn reduce(mut self, event: PointerEvent, axes: Option<&AxesSnapshot>) -> Reduced {
        let mut completed = None;
        match event {
            PointerEvent::Start { x, y } => self.start_gesture(x, y, axes),
            PointerEvent::Move { x, y } => self.update_gesture(x, y),
            PointerEvent::End | PointerEvent::Cancel => {
                completed = self.end_gesture();
                self.mouse = None;
            }
            PointerEvent::Hover { x, y } => {
                self.mouse = (x.is_finite() && y.is_finite()).then_some(MousePosition { x, y });
            }
            PointerEvent::Leave => {
                completed = self.end_gesture();
                self.mouse = None;
            }
        }
        Reduced {
            state: self,
            completed,
        }
    }

    fn start_gesture(&mut self, x: f64, y: f64, axes: Option<&AxesSnapshot>) {
        let Some(axes) = axes.copied() else {
            debug!("gesture start ignored: no frame drawn yet");
            return;
        };
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let zone = GestureZone::classify(axes.plot, x, y);
        debug!(x, y, ?zone, "gesture start");
        self.mode = InteractionMode::Panning;
        self.gesture = Some(GestureSnapshot {
            start: MousePosition { x, y },
            zone,
            viewport: self.viewport,
            axes,
        });
    }

    fn update_gesture(&mut self, x: f64, y: f64) {
        let Some(gesture) = self.gesture else {
            return;
        };
        let dx = x - gesture.start.x;
        let dy = y - gesture.start.y;
        let axes = gesture.axes;
        let base = gesture.viewport;

        let candidate = match gesture.zone {
            GestureZone::YAxis => zoom_y_symmetric(
                axes.y_scale.domain(),
                axes.y_scale.mode(),
                dy,
                axes.plot.height,
            )
            .map(|domain| Viewport {
                y_domain: Some(domain),
                ..base
            }),
            GestureZone::XAxis => {
                let anchor_time = axes.x_scale.invert(gesture.start.x);
                zoom_x_anchored(
                    axes.x_scale.domain(),
                    anchor_time,
                    gesture.start.x + dx,
                    axes.plot.width,
                )
                .map(|domain| Viewport {
                    x_domain: Some(domain),
                    ..base
                })
            }
            GestureZone::Plot => {
                let x_domain = pan_x(axes.x_scale.domain(), dx, axes.plot.width);
                match base.y_domain {
                    Some(y_domain) => x_domain
                        .zip(pan_y(y_domain, base.scale_mode, dy, axes.plot.height))
                        .map(|(x_domain, y_domain)| Viewport {
                            x_domain: Some(x_domain),
                            y_domain: Some(y_domain),
                            ..base
                        }),
                    None => x_domain.map(|x_domain| Viewport {
                        x_domain: Some(x_domain),
                        ..base
                    }),
                }
            }
        };

        match candidate {
            Some(viewport) => {
                trace!(dx, dy, zone = ?gesture.zone, "gesture update");
                self.viewport = viewport;
            }
            None => debug!(dx, dy, zone = ?gesture.zone, "gesture update rejected"),
        }
    }

    fn end_gesture(&mut self) -> Option<Viewport> {
        self.gesture.take()?;
        self.mode = InteractionMode::Idle;
        debug!("gesture end");
        Some(self.viewport)
    }
}
