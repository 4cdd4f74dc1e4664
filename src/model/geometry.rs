//! Screen geometry (pure Rust, no FFI).
//!
//! All coordinates are screen coordinates as reported by the windowing
//! system, with the origin at the top-left of the primary display.

use std::ops::{Add, Sub};

use super::settings::Placement;

/// A point on screen (or inside a window, for local pointer positions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a floating pointer position to the nearest pixel.
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A screen region with strictly positive area.
///
/// The only way to build one is [`Rectangle::new`] or
/// [`Rectangle::from_corners`], both of which reject zero-area input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl Rectangle {
    /// Returns `None` if either dimension is zero.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Normalize a drag gesture into a rectangle, whatever the drag direction.
    ///
    /// `x = min(xs)`, `y = min(ys)`, `w = |dx|`, `h = |dy|`. Returns `None`
    /// for zero-area gestures (a click, or a purely horizontal/vertical drag).
    pub fn from_corners(start: Point, end: Point) -> Option<Self> {
        let x = start.x.min(end.x);
        let y = start.y.min(end.y);
        let width = start.x.abs_diff(end.x);
        let height = start.y.abs_diff(end.y);
        Self::new(x, y, width, height)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Where a floating window mirroring this region first appears.
    pub fn initial_window_position(&self, placement: Placement) -> Point {
        match placement {
            Placement::Center => Point::new(
                self.x + (self.width / 2) as i32,
                self.y + (self.height / 2) as i32,
            ),
            Placement::TopLeft => self.origin(),
        }
    }
}
