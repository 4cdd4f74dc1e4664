//! Region capture via `xcap`.
//!
//! We pick the monitor under the region's top-left corner and ask `xcap`
//! for just the part of the region that lies on it. `capture_region` takes
//! monitor-local coordinates in the same units `Monitor::width()` reports;
//! the returned image may be larger on HiDPI displays (physical pixels).

use xcap::Monitor;

use super::types::{CaptureError, Frame};
use super::ScreenCapture;
use crate::model::geometry::Rectangle;

#[derive(Debug, Default, Clone, Copy)]
pub struct XcapCapture;

impl XcapCapture {
    pub fn new() -> Self {
        Self
    }
}

/// Monitor position and size, in the units `xcap` reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Monitor-local rectangle (x, y, width, height) of `region`, clipped to
/// the monitor.
///
/// Returns `None` when the region's top-left corner is not on the monitor.
pub fn region_in_monitor(
    region: &Rectangle,
    monitor: MonitorGeometry,
) -> Option<(u32, u32, u32, u32)> {
    let local_x = u32::try_from(i64::from(region.x()) - i64::from(monitor.x)).ok()?;
    let local_y = u32::try_from(i64::from(region.y()) - i64::from(monitor.y)).ok()?;
    if local_x >= monitor.width || local_y >= monitor.height {
        return None;
    }

    Some((
        local_x,
        local_y,
        region.width().min(monitor.width - local_x),
        region.height().min(monitor.height - local_y),
    ))
}

fn monitor_geometry(monitor: &Monitor) -> Result<MonitorGeometry, CaptureError> {
    let grab = |e: xcap::XCapError| CaptureError::Grab(e.to_string());
    Ok(MonitorGeometry {
        x: monitor.x().map_err(grab)?,
        y: monitor.y().map_err(grab)?,
        width: monitor.width().map_err(grab)?,
        height: monitor.height().map_err(grab)?,
    })
}

impl ScreenCapture for XcapCapture {
    fn capture(&self, region: &Rectangle) -> Result<Frame, CaptureError> {
        let monitor =
            Monitor::from_point(region.x(), region.y()).map_err(|e| CaptureError::NoMonitor {
                x: region.x(),
                y: region.y(),
                reason: e.to_string(),
            })?;
        let geometry = monitor_geometry(&monitor)?;

        let out_of_bounds = || CaptureError::OutOfBounds {
            x: region.x(),
            y: region.y(),
            width: region.width(),
            height: region.height(),
        };
        let (x, y, width, height) = region_in_monitor(region, geometry).ok_or_else(out_of_bounds)?;

        let image = monitor
            .capture_region(x, y, width, height)
            .map_err(|e| CaptureError::Grab(e.to_string()))?;
        let (width, height) = image.dimensions();
        Frame::new(width, height, image.into_raw()).ok_or_else(out_of_bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FHD: MonitorGeometry = MonitorGeometry {
        x: 0,
        y: 0,
        width: 1920,
        height: 1080,
    };

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(x, y, w, h).unwrap()
    }

    #[test]
    fn test_region_fully_on_monitor() {
        let local = region_in_monitor(&rect(100, 100, 200, 150), FHD);
        assert_eq!(local, Some((100, 100, 200, 150)));
    }

    #[test]
    fn test_region_clipped_at_monitor_edge() {
        let local = region_in_monitor(&rect(1900, 1000, 200, 150), FHD);
        assert_eq!(local, Some((1900, 1000, 20, 80)));
    }

    #[test]
    fn test_region_on_secondary_monitor() {
        let right = MonitorGeometry { x: 1920, ..FHD };
        let local = region_in_monitor(&rect(2000, 10, 50, 50), right);
        assert_eq!(local, Some((80, 10, 50, 50)));
    }

    #[test]
    fn test_region_on_monitor_left_of_primary() {
        let left = MonitorGeometry { x: -1920, ..FHD };
        let local = region_in_monitor(&rect(-100, 0, 300, 50), left);
        assert_eq!(local, Some((1820, 0, 100, 50)));
    }

    #[test]
    fn test_region_outside_monitor_is_none() {
        assert_eq!(region_in_monitor(&rect(-10, 0, 5, 5), FHD), None);
        assert_eq!(region_in_monitor(&rect(1920, 0, 5, 5), FHD), None);
        assert_eq!(region_in_monitor(&rect(0, 1080, 5, 5), FHD), None);
    }
}
