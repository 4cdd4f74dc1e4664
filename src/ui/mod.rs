//! egui rendering.
//!
//! - [`app`]: the main window and per-frame orchestration
//! - [`overlay`]: full-screen selection overlay
//! - [`region_window`]: one floating window per live view
//!
//! Secondary windows are immediate viewports, so they are drawn inside the
//! main window's update and share its single event loop.

pub mod app;
pub mod overlay;
pub mod region_window;

pub use app::ScreenCaptureApp;
