//! Screen region capture.
//!
//! - [`types`]: `Frame` and `CaptureError`
//! - [`xcap_backend`]: the real grabber built on `xcap`
//!
//! Views only see the [`ScreenCapture`] trait, so tests can feed them
//! synthetic frames.

pub mod types;
pub mod xcap_backend;

pub use types::{CaptureError, Frame};
pub use xcap_backend::XcapCapture;

use crate::model::geometry::Rectangle;

/// Grabs the current contents of a screen region.
///
/// Called synchronously from the UI loop once per tick, so implementations
/// should return as soon as the pixels are in memory.
pub trait ScreenCapture {
    fn capture(&self, region: &Rectangle) -> Result<Frame, CaptureError>;
}

impl<T: ScreenCapture + ?Sized> ScreenCapture for &T {
    fn capture(&self, region: &Rectangle) -> Result<Frame, CaptureError> {
        (**self).capture(region)
    }
}
