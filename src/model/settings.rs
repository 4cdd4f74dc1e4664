//! User-tunable settings (pure Rust, no FFI).
//!
//! This module defines the settings structure that is deserialized from
//! the optional JSON config file. Every field has a default, so an empty
//! `{}` file is valid.

use std::time::Duration;

use serde::Deserialize;

use super::constants::*;
use crate::clamp;

/// Where a new region window appears relative to its source region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Top-left corner at the midpoint of the region.
    #[default]
    Center,
    /// Exactly over the region.
    TopLeft,
}

/// Complete settings, as read from the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between two captures of the same region.
    pub update_interval_ms: u64,
    /// Initial value of the shared transparency slider [0.0, 1.0].
    pub default_transparency: f32,
    /// Opacity of the selection overlay.
    pub overlay_opacity: f32,
    /// Stroke width of the selection outline, in points.
    pub outline_width: f32,
    /// Initial window placement for new region views.
    pub placement: Placement,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            default_transparency: DEFAULT_TRANSPARENCY,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            outline_width: DEFAULT_OUTLINE_WIDTH,
            placement: Placement::Center,
        }
    }
}

impl Settings {
    /// Clamps all values to valid ranges, warning about each one changed.
    pub fn validate(&mut self) {
        let interval = self
            .update_interval_ms
            .clamp(MIN_UPDATE_INTERVAL_MS, MAX_UPDATE_INTERVAL_MS);
        if interval != self.update_interval_ms {
            log::warn!(
                "Invalid update_interval_ms {}, clamping to {}-{} range",
                self.update_interval_ms,
                MIN_UPDATE_INTERVAL_MS,
                MAX_UPDATE_INTERVAL_MS
            );
            self.update_interval_ms = interval;
        }

        self.default_transparency = clamp_warn(
            "default_transparency",
            self.default_transparency,
            MIN_TRANSPARENCY,
            MAX_TRANSPARENCY,
        );
        self.overlay_opacity = clamp_warn(
            "overlay_opacity",
            self.overlay_opacity,
            MIN_OVERLAY_OPACITY,
            MAX_OVERLAY_OPACITY,
        );
        self.outline_width = clamp_warn(
            "outline_width",
            self.outline_width,
            MIN_OUTLINE_WIDTH,
            MAX_OUTLINE_WIDTH,
        );
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}

fn clamp_warn(name: &str, v: f32, lo: f32, hi: f32) -> f32 {
    let clamped = clamp(v, lo, hi);
    if clamped != v {
        log::warn!("Invalid {} {:.2}, clamping to {:.2}-{:.2} range", name, v, lo, hi);
    }
    clamped
}
