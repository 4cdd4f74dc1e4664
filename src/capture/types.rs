//! Data types for region capture.

use thiserror::Error;

/// One captured image, unpremultiplied RGBA8, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Frame {
    /// Returns `None` if `rgba` does not hold exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        if rgba.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba,
        })
    }

    /// A frame filled with one color. Mostly useful in tests.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let rgba = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

// Pixel data is far too large to be useful in debug output.
impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Errors that can occur while capturing a region.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("No monitor contains point ({x}, {y}): {reason}")]
    NoMonitor { x: i32, y: i32, reason: String },

    #[error("Screen grab failed: {0}")]
    Grab(String),

    #[error("Region {width}x{height} at ({x}, {y}) is outside the monitor")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}
