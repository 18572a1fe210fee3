use crate::core::data::viewport::Viewport;

/// Minimum cursor movement, in pixels, before a drag registers as a pan.
const MIN_DRAG_DISTANCE: f64 = 2.0;

const ZOOM_FACTOR_IN: f64 = 0.8;
const ZOOM_FACTOR_OUT: f64 = 1.25;

/// One-render-at-a-time guard, kept as an explicit state machine so the
/// single-pass invariant is auditable. `begin_render` refuses to start a
/// second pass while one is marked in flight.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderPhase {
    Idle,
    Rendering,
}

/// All interaction state for the explorer window.
///
/// The render trigger is a pure function of this struct: a pass is needed
/// exactly when the (viewport, dimensions) snapshot differs from the one
/// recorded by the last completed pass.
#[derive(Debug, Clone)]
pub struct AppState {
    viewport: Viewport,
    width: u32,
    height: u32,
    cursor: (f64, f64),
    drag_anchor: Option<(f64, f64)>,
    fullscreen: bool,
    phase: RenderPhase,
    last_rendered: Option<(Viewport, u32, u32)>,
}

impl AppState {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::default_view(),
            width,
            height,
            cursor: (0.0, 0.0),
            drag_anchor: None,
            fullscreen: false,
            phase: RenderPhase::Idle,
            last_rendered: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Whether the view has changed since the last completed pass. Pure:
    /// calling this never mutates anything.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.last_rendered != Some((self.viewport, self.width, self.height))
    }

    /// Transitions Idle → Rendering. Returns false (and changes nothing) if
    /// a pass is already in flight.
    pub fn begin_render(&mut self) -> bool {
        match self.phase {
            RenderPhase::Idle => {
                self.phase = RenderPhase::Rendering;
                true
            }
            RenderPhase::Rendering => false,
        }
    }

    /// Records the completed pass and returns to Idle.
    pub fn finish_render(&mut self) {
        debug_assert_eq!(self.phase, RenderPhase::Rendering);
        self.last_rendered = Some((self.viewport, self.width, self.height));
        self.phase = RenderPhase::Idle;
    }

    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
        if self.drag_anchor.is_some() {
            self.drag_pan();
        }
    }

    pub fn begin_drag(&mut self) {
        self.drag_anchor = Some(self.cursor);
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Pans by the drag delta once it exceeds the movement threshold,
    /// re-anchoring so the next delta is measured from here.
    fn drag_pan(&mut self) {
        let Some((anchor_x, anchor_y)) = self.drag_anchor else {
            return;
        };
        if self.width == 0 || self.height == 0 {
            return;
        }

        let dx = self.cursor.0 - anchor_x;
        let dy = self.cursor.1 - anchor_y;

        if (dx * dx + dy * dy).sqrt() < MIN_DRAG_DISTANCE {
            return;
        }

        // Dragging right moves the view left in the plane; dragging down
        // moves it up (pixel y grows downward, imaginary axis grows upward).
        let re_delta = -dx * self.viewport.re_span() / self.width as f64;
        let im_delta = dy * self.viewport.im_span() / self.height as f64;

        self.viewport = self.viewport.panned(re_delta, im_delta);
        self.drag_anchor = Some(self.cursor);
    }

    /// Zooms about the plane point under the cursor.
    pub fn zoom_at_cursor(&mut self, zoom_in: bool) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let factor = if zoom_in {
            ZOOM_FACTOR_IN
        } else {
            ZOOM_FACTOR_OUT
        };

        let (re, im) = self.cursor_plane_point();
        self.viewport = self.viewport.zoomed_about(re, im, factor);
    }

    pub fn reset_view(&mut self) {
        self.viewport = Viewport::default_view();
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Records new output dimensions, rescaling the viewport around its
    /// center so one plane unit keeps the same on-screen size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 && self.width > 0 && self.height > 0 {
            self.viewport = self.viewport.scaled(
                width as f64 / self.width as f64,
                height as f64 / self.height as f64,
            );
        }

        self.width = width;
        self.height = height;
    }

    /// Magnification relative to the default view.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        Viewport::default_view().re_span() / self.viewport.re_span()
    }

    fn cursor_plane_point(&self) -> (f64, f64) {
        let (cx, cy) = self.cursor;
        let re = self.viewport.re_min() + (cx / self.width as f64) * self.viewport.re_span();
        let im = self.viewport.im_max() - (cy / self.height as f64) * self.viewport.im_span();
        (re, im)
    }
}
