//! Library half of regionview. Keep this free of windowing code so tests
//! can run as normal integration tests; egui rendering lives in the binary.

pub mod app;
pub mod capture;
pub mod events;
pub mod handlers;
pub mod model;
pub mod storage;

// Re-export the types most callers need
pub use app::AppState;
pub use capture::{CaptureError, Frame, ScreenCapture, XcapCapture};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use handlers::{dispatch_events, EventHandler};
pub use model::{Point, Rectangle, RegionView, Settings, ViewId};

/// Clamp a value to [lo, hi]. NaN maps to `lo`.
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_nan() || v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Convert a [0, 1] alpha into an 8-bit channel value.
pub fn alpha_to_u8(a: f32) -> u8 {
    (clamp(a, 0.0, 1.0) * 255.0).round() as u8
}
