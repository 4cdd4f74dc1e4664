//! Tests for the model layer (geometry, selection, views, settings).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use std::time::Instant;

use regionview::model::constants::*;
use regionview::model::{
    Placement, Point, Rectangle, RegionView, SelectionController, SelectionOutcome, Settings,
    ViewId,
};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

/// Run a full press-drag-release gesture.
fn gesture(start: Point, end: Point) -> SelectionOutcome {
    let mut sel = SelectionController::new();
    sel.start();
    sel.press(start);
    sel.drag(Point::new((start.x + end.x) / 2, (start.y + end.y) / 2));
    sel.drag(end);
    sel.release(end)
}

fn view_at(source: Rectangle) -> RegionView {
    RegionView::new(ViewId(0), source, &Settings::default(), Instant::now())
}

// === Selection Tests ===

#[test]
fn click_without_drag_creates_nothing() {
    let p = Point::new(40, 40);
    assert_eq!(gesture(p, p), SelectionOutcome::Discarded);
}

#[test]
fn horizontal_or_vertical_drag_creates_nothing() {
    assert_eq!(
        gesture(Point::new(10, 10), Point::new(90, 10)),
        SelectionOutcome::Discarded
    );
    assert_eq!(
        gesture(Point::new(10, 10), Point::new(10, 90)),
        SelectionOutcome::Discarded
    );
}

#[test]
fn all_four_drag_directions_normalize_identically() {
    let expected = SelectionOutcome::Committed(Rectangle::new(100, 100, 200, 150).unwrap());
    let (a, b) = ((100, 100), (300, 250));

    let cases = [
        ((a.0, a.1), (b.0, b.1)), // down-right
        ((b.0, a.1), (a.0, b.1)), // down-left
        ((a.0, b.1), (b.0, a.1)), // up-right
        ((b.0, b.1), (a.0, a.1)), // up-left
    ];
    for (start, end) in cases {
        let outcome = gesture(Point::new(start.0, start.1), Point::new(end.0, end.1));
        assert_eq!(outcome, expected, "start {:?} end {:?}", start, end);
    }
}

#[test]
fn release_closes_overlay_either_way() {
    let mut sel = SelectionController::new();
    sel.start();
    sel.press(Point::new(5, 5));
    sel.release(Point::new(5, 5));
    assert!(!sel.is_active());

    sel.start();
    sel.press(Point::new(5, 5));
    sel.release(Point::new(50, 50));
    assert!(!sel.is_active());
}

// === Region View Tests ===

#[test]
fn end_to_end_selection_to_view() {
    let outcome = gesture(Point::new(100, 100), Point::new(300, 250));
    let SelectionOutcome::Committed(region) = outcome else {
        panic!("expected a committed selection");
    };
    assert_eq!(region, Rectangle::new(100, 100, 200, 150).unwrap());

    let view = view_at(region);
    assert_eq!(view.position(), Point::new(200, 175));
    assert_eq!(view.window_size(), (200, 150));
}

#[test]
fn top_left_placement_overlays_source() {
    let mut settings = Settings::default();
    settings.placement = Placement::TopLeft;
    let region = Rectangle::new(100, 100, 200, 150).unwrap();
    let view = RegionView::new(ViewId(1), region, &settings, Instant::now());
    assert_eq!(view.position(), Point::new(100, 100));
}

#[test]
fn drag_moves_window_by_exact_delta() {
    let region = Rectangle::new(100, 100, 200, 150).unwrap();
    let mut view = view_at(region);
    let start = view.position();

    // Grab the window 7px right and 3px down from its corner.
    let grab = Point::new(7, 3);
    view.begin_drag(grab);
    let cursor = start + grab;

    for (dx, dy) in [(15, -4), (-60, 22), (0, 0)] {
        let moved = view.drag_to(cursor + Point::new(dx, dy));
        assert_eq!(moved, Some(start + Point::new(dx, dy)));
    }
    view.end_drag();

    assert_eq!(view.source(), &region);
    assert!(!view.is_dragging());
}

#[test]
fn drag_without_press_is_ignored() {
    let mut view = view_at(Rectangle::new(0, 0, 10, 10).unwrap());
    let before = view.position();
    assert_eq!(view.drag_to(Point::new(500, 500)), None);
    assert_eq!(view.position(), before);
}

#[test]
fn transparency_is_clamped() {
    let mut view = view_at(Rectangle::new(0, 0, 10, 10).unwrap());
    assert!(approx_eq(view.transparency(), 1.0));
    view.set_transparency(0.25);
    assert!(approx_eq(view.transparency(), 0.25));
    view.set_transparency(3.0);
    assert!(approx_eq(view.transparency(), 1.0));
    view.set_transparency(-1.0);
    assert!(approx_eq(view.transparency(), 0.0));
}

#[test]
fn close_cancels_refresh() {
    let mut view = view_at(Rectangle::new(0, 0, 10, 10).unwrap());
    assert!(!view.timer().is_cancelled());
    view.close();
    assert!(view.is_closed());
    assert!(view.timer().is_cancelled());
}

// === Settings Tests ===

#[test]
fn settings_defaults() {
    let s = Settings::default();
    assert_eq!(s.update_interval_ms, DEFAULT_UPDATE_INTERVAL_MS);
    assert_eq!(s.update_interval_ms, 100);
    assert!(approx_eq(s.default_transparency, 1.0));
    assert!(approx_eq(s.overlay_opacity, 0.3));
    assert_eq!(s.placement, Placement::Center);
}

#[test]
fn validate_keeps_valid_values() {
    let mut s = Settings::default();
    s.update_interval_ms = 250;
    s.default_transparency = 0.4;
    s.validate();
    assert_eq!(s.update_interval_ms, 250);
    assert!(approx_eq(s.default_transparency, 0.4));
}

#[test]
fn validate_clamps_interval() {
    let mut s = Settings::default();
    s.update_interval_ms = 0;
    s.validate();
    assert_eq!(s.update_interval_ms, MIN_UPDATE_INTERVAL_MS);

    s.update_interval_ms = u64::MAX;
    s.validate();
    assert_eq!(s.update_interval_ms, MAX_UPDATE_INTERVAL_MS);
}

#[test]
fn validate_clamps_transparency_and_overlay() {
    let mut s = Settings::default();
    s.default_transparency = 1.5;
    s.overlay_opacity = 0.0;
    s.outline_width = 99.0;
    s.validate();
    assert!(approx_eq(s.default_transparency, MAX_TRANSPARENCY));
    assert!(approx_eq(s.overlay_opacity, MIN_OVERLAY_OPACITY));
    assert!(approx_eq(s.outline_width, MAX_OUTLINE_WIDTH));
}
