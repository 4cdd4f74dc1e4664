//! Event dispatcher.
//!
//! Drains the bus and calls the matching [`EventHandler`] method for each
//! event, in publish order. Called once per UI frame.
//!
//! ```text
//! EventBus::drain() → dispatch_events() → EventHandler::on_*()
//! ```

use crate::events::{AppEvent, EventBus};
use crate::model::{Rectangle, ViewId};

/// Typed receiver for every [`AppEvent`].
pub trait EventHandler {
    fn on_select_region(&mut self);
    fn on_selection_cancelled(&mut self);
    fn on_create_region_view(&mut self, region: Rectangle);
    fn on_set_transparency(&mut self, value: f32);
    fn on_close_view(&mut self, id: ViewId);
}

/// Dispatch all pending events. Returns how many were handled.
pub fn dispatch_events<H: EventHandler + ?Sized>(bus: &EventBus, handler: &mut H) -> usize {
    let events = bus.drain();
    let count = events.len();
    for event in events {
        dispatch_event(&event, handler);
    }
    count
}

/// Dispatch a single event.
pub fn dispatch_event<H: EventHandler + ?Sized>(event: &AppEvent, handler: &mut H) {
    log::debug!("Dispatching: {}", event.description());
    match *event {
        AppEvent::SelectRegion => handler.on_select_region(),
        AppEvent::SelectionCancelled => handler.on_selection_cancelled(),
        AppEvent::CreateRegionView(region) => handler.on_create_region_view(region),
        AppEvent::SetTransparency(value) => handler.on_set_transparency(value),
        AppEvent::CloseView(id) => handler.on_close_view(id),
    }
}
