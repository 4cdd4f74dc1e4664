//! State of one floating region window.
//!
//! A `RegionView` mirrors a fixed source rectangle. The window showing it
//! can be dragged anywhere without affecting what is captured.

use std::fmt;
use std::time::Instant;

use super::geometry::{Point, Rectangle};
use super::settings::Settings;
use super::timer::RefreshTimer;
use crate::capture::{CaptureError, Frame, ScreenCapture};
use crate::clamp;
use crate::model::constants::{MAX_TRANSPARENCY, MIN_TRANSPARENCY};

/// Identifies a view for its whole life. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

#[derive(Debug)]
pub struct RegionView {
    id: ViewId,
    source: Rectangle,
    position: Point,
    transparency: f32,
    timer: RefreshTimer,
    frame: Option<Frame>,
    frame_generation: u64,
    /// Local pointer offset recorded on button-down; `None` when not dragging.
    drag_offset: Option<Point>,
    closed: bool,
}

impl RegionView {
    pub fn new(id: ViewId, source: Rectangle, settings: &Settings, now: Instant) -> Self {
        Self {
            id,
            source,
            position: source.initial_window_position(settings.placement),
            transparency: MAX_TRANSPARENCY,
            timer: RefreshTimer::start(settings.update_interval(), now),
            frame: None,
            frame_generation: 0,
            drag_offset: None,
            closed: false,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    /// The captured screen region. Fixed for the life of the view.
    pub fn source(&self) -> &Rectangle {
        &self.source
    }

    /// Top-left of the floating window, in screen coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Window size (width, height); always the size of the source region.
    pub fn window_size(&self) -> (u32, u32) {
        (self.source.width(), self.source.height())
    }

    pub fn transparency(&self) -> f32 {
        self.transparency
    }

    /// Set window alpha; clamped to [0, 1], 1 = opaque.
    pub fn set_transparency(&mut self, value: f32) {
        self.transparency = clamp(value, MIN_TRANSPARENCY, MAX_TRANSPARENCY);
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Bumped every time the held frame is replaced.
    pub fn frame_generation(&self) -> u64 {
        self.frame_generation
    }

    pub fn timer(&self) -> &RefreshTimer {
        &self.timer
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Capture and swap in a new frame if the timer is due.
    ///
    /// `clock` is read once before the capture, to check the timer, and
    /// once after it returns: the next tick is due one interval after the
    /// capture completed.
    ///
    /// Returns `Ok(true)` when a new frame was captured. On failure the
    /// refresh chain of this view stops (its timer is cancelled) and the
    /// last good frame stays on screen.
    pub fn tick<C, F>(&mut self, capture: &C, clock: F) -> Result<bool, CaptureError>
    where
        C: ScreenCapture + ?Sized,
        F: Fn() -> Instant,
    {
        if self.closed || !self.timer.is_due(clock()) {
            return Ok(false);
        }
        match capture.capture(&self.source) {
            Ok(frame) => {
                self.frame = Some(frame);
                self.frame_generation += 1;
                self.timer.reschedule(clock());
                Ok(true)
            }
            Err(e) => {
                self.timer.cancel();
                Err(e)
            }
        }
    }

    /// Button went down at `local` (window-relative).
    pub fn begin_drag(&mut self, local: Point) {
        self.drag_offset = Some(local);
    }

    /// Pointer moved to `cursor` (screen coordinates) with the button held.
    /// The window follows so the grabbed point stays under the cursor.
    /// Returns the new window position, or `None` if no drag is in progress.
    pub fn drag_to(&mut self, cursor: Point) -> Option<Point> {
        let offset = self.drag_offset?;
        self.position = cursor - offset;
        Some(self.position)
    }

    pub fn end_drag(&mut self) {
        self.drag_offset = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    /// Stop refreshing. The caller releases the window afterwards.
    pub fn close(&mut self) {
        self.timer.cancel();
        self.drag_offset = None;
        self.closed = true;
    }
}
