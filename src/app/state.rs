//! Top-level application state.
//!
//! Owns the selection gesture, the registry of live views and the shared
//! transparency value. The UI drives it only through events and
//! [`AppState::tick_views`], so all of it is testable without a window.

use std::time::{Duration, Instant};

use super::helpers::sync_transparency_to_all_views;
use crate::capture::{CaptureError, ScreenCapture};
use crate::clamp;
use crate::handlers::EventHandler;
use crate::model::constants::{MAX_TRANSPARENCY, MIN_TRANSPARENCY};
use crate::model::{Rectangle, SelectionController, Settings, ViewId, ViewRegistry};

pub struct AppState {
    settings: Settings,
    selection: SelectionController,
    views: ViewRegistry,
    transparency: f32,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            transparency: settings.default_transparency,
            settings,
            selection: SelectionController::new(),
            views: ViewRegistry::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionController {
        &mut self.selection
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut ViewRegistry {
        &mut self.views
    }

    /// Current value of the shared transparency control.
    pub fn transparency(&self) -> f32 {
        self.transparency
    }

    /// Register a view for `region`, already at the shared transparency.
    pub fn create_view(&mut self, region: Rectangle, now: Instant) -> ViewId {
        let id = self.views.create(region, &self.settings, now);
        if let Some(view) = self.views.get_mut(id) {
            view.set_transparency(self.transparency);
        }
        log::info!(
            "Created {} for {}x{} at ({}, {})",
            id,
            region.width(),
            region.height(),
            region.x(),
            region.y()
        );
        id
    }

    /// Refresh every due view, in creation order.
    ///
    /// `clock` is read around each capture, so time spent capturing one
    /// view does not shorten the interval of the next.
    ///
    /// Returns the views whose capture failed during this pass. Their
    /// refresh has stopped; other views are unaffected.
    pub fn tick_views<C, F>(&mut self, capture: &C, clock: F) -> Vec<(ViewId, CaptureError)>
    where
        C: ScreenCapture + ?Sized,
        F: Fn() -> Instant,
    {
        let mut failures = Vec::new();
        for view in self.views.iter_mut() {
            if let Err(e) = view.tick(capture, &clock) {
                failures.push((view.id(), e));
            }
        }
        failures
    }

    /// Time until the next view is due, or `None` if nothing refreshes.
    pub fn next_refresh_in(&self, now: Instant) -> Option<Duration> {
        self.views
            .iter()
            .filter_map(|v| v.timer().time_until_due(now))
            .min()
    }
}

impl EventHandler for AppState {
    fn on_select_region(&mut self) {
        self.selection.start();
    }

    fn on_selection_cancelled(&mut self) {
        self.selection.cancel();
    }

    fn on_create_region_view(&mut self, region: Rectangle) {
        self.create_view(region, Instant::now());
    }

    fn on_set_transparency(&mut self, value: f32) {
        self.transparency = clamp(value, MIN_TRANSPARENCY, MAX_TRANSPARENCY);
        sync_transparency_to_all_views(&mut self.views, self.transparency);
    }

    fn on_close_view(&mut self, id: ViewId) {
        match self.views.remove(id) {
            Some(_) => log::info!("Closed {}", id),
            None => log::debug!("Close requested for unknown {}", id),
        }
    }
}
