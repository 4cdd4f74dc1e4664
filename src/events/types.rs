//! Application events for inter-module communication.
//!
//! These events represent everything the windows can ask the application
//! to do. They are published by the UI and handled by the dispatcher.
//! This module is pure Rust with no windowing dependencies, making it
//! fully testable.

use crate::model::{Rectangle, ViewId};

/// Application-level events.
///
/// Events flow from producers (main window, overlay, region windows)
/// through the EventBus to the dispatcher, which calls the matching
/// `EventHandler` method.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // === Main Window ===
    /// "Select Region" pressed: open the selection overlay.
    SelectRegion,

    /// Transparency slider moved; apply to every view.
    SetTransparency(f32),

    // === Selection Overlay ===
    /// Gesture produced a non-zero rectangle.
    CreateRegionView(Rectangle),

    /// Escape pressed or overlay closed without a selection.
    SelectionCancelled,

    // === Region Windows ===
    /// Right-click or window-manager close on a region window.
    CloseView(ViewId),
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::SelectRegion => "Open selection overlay",
            AppEvent::SetTransparency(_) => "Broadcast transparency",
            AppEvent::CreateRegionView(_) => "Create region view",
            AppEvent::SelectionCancelled => "Selection cancelled",
            AppEvent::CloseView(_) => "Close region view",
        }
    }
}
