//! Configuration constants and default values.
//!
//! This module contains all application constants including window
//! geometry, refresh defaults, and validation limits.

// === Main Window ===

/// Title of the control window.
pub const MAIN_WINDOW_TITLE: &str = "Screen Capture";

/// Fixed size of the control window (width, height) in points.
pub const MAIN_WINDOW_SIZE: (f32, f32) = (300.0, 200.0);

/// Label of the button that starts a selection.
pub const SELECT_BUTTON_LABEL: &str = "Select Region";

/// Label of the shared transparency slider.
pub const TRANSPARENCY_LABEL: &str = "Transparency";

// === Region Windows ===

/// Title given to every floating region window.
pub const REGION_WINDOW_TITLE: &str = "Captured Region";

/// Default delay between two captures of the same region, in milliseconds.
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 100;

/// Fastest allowed refresh (roughly one frame at 60Hz).
pub const MIN_UPDATE_INTERVAL_MS: u64 = 16;

/// Slowest allowed refresh.
pub const MAX_UPDATE_INTERVAL_MS: u64 = 10_000;

// === Transparency ===

/// Default alpha of region windows (1.0 = opaque).
pub const DEFAULT_TRANSPARENCY: f32 = 1.0;

/// Minimum alpha.
pub const MIN_TRANSPARENCY: f32 = 0.0;

/// Maximum alpha.
pub const MAX_TRANSPARENCY: f32 = 1.0;

/// Slider step.
pub const TRANSPARENCY_STEP: f64 = 0.01;

// === Selection Overlay ===

/// Default opacity of the full-screen selection overlay.
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.3;

/// Overlay opacity limits. Below the minimum the overlay is invisible,
/// above the maximum the user cannot see what they are selecting.
pub const MIN_OVERLAY_OPACITY: f32 = 0.05;
pub const MAX_OVERLAY_OPACITY: f32 = 0.9;

/// Default outline stroke width in points.
pub const DEFAULT_OUTLINE_WIDTH: f32 = 2.0;

pub const MIN_OUTLINE_WIDTH: f32 = 1.0;
pub const MAX_OUTLINE_WIDTH: f32 = 10.0;

/// Outline color (R, G, B) - red.
pub const OUTLINE_COLOR: (u8, u8, u8) = (255, 0, 0);

// === Config ===

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "regionview";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.json";
