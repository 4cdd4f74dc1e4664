//! Click-drag-release selection gesture.
//!
//! The controller only tracks state; opening and closing the overlay window
//! is the renderer's job, driven by [`SelectionController::is_active`].

use super::geometry::{Point, Rectangle};

/// Where the gesture currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// No overlay on screen.
    #[default]
    Idle,
    /// Overlay is open, waiting for the button to go down.
    Armed,
    /// Button is held; `current` follows the pointer.
    Dragging { start: Point, current: Point },
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Non-zero area; the owner should create a region view for it.
    Committed(Rectangle),
    /// Zero-area or otherwise unusable gesture. Dropped silently.
    Discarded,
}

/// Tracks one selection gesture at a time.
#[derive(Debug, Default)]
pub struct SelectionController {
    phase: SelectionPhase,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// True while the overlay should be shown.
    pub fn is_active(&self) -> bool {
        self.phase != SelectionPhase::Idle
    }

    /// Open the overlay. Ignored if a selection is already running.
    pub fn start(&mut self) {
        if self.phase == SelectionPhase::Idle {
            self.phase = SelectionPhase::Armed;
        }
    }

    /// Pointer went down at `p`.
    pub fn press(&mut self, p: Point) {
        if self.is_active() {
            self.phase = SelectionPhase::Dragging {
                start: p,
                current: p,
            };
        }
    }

    /// Pointer moved to `p` with the button held.
    pub fn drag(&mut self, p: Point) {
        if let SelectionPhase::Dragging { current, .. } = &mut self.phase {
            *current = p;
        }
    }

    /// Pointer released at `p`. Always closes the overlay.
    pub fn release(&mut self, p: Point) -> SelectionOutcome {
        let outcome = match self.phase {
            SelectionPhase::Dragging { start, .. } => Rectangle::from_corners(start, p)
                .map(SelectionOutcome::Committed)
                .unwrap_or(SelectionOutcome::Discarded),
            _ => SelectionOutcome::Discarded,
        };
        self.phase = SelectionPhase::Idle;
        outcome
    }

    /// Abort the gesture and close the overlay.
    pub fn cancel(&mut self) {
        self.phase = SelectionPhase::Idle;
    }

    /// The single outline to draw right now, as (start, current).
    pub fn outline(&self) -> Option<(Point, Point)> {
        match self.phase {
            SelectionPhase::Dragging { start, current } => Some((start, current)),
            _ => None,
        }
    }
}
