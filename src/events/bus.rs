//! Event bus using mpsc channels.
//!
//! - Windows publish events via `EventPublisher::publish()`
//! - The app drains them once per UI frame via `EventBus::drain()`
//!
//! Everything runs on the UI thread; the channel is just an ordered queue
//! that lets a window callback publish while the app is borrowed.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Event queue owned by the application.
///
/// # Example
///
/// ```
/// use regionview::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::SelectRegion);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle. Cheap to clone.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Next pending event, without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds a sender itself, so Disconnected cannot happen
            // while it is alive.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue an event for the next drain.
    ///
    /// If the bus has been dropped (app shutting down) the event is lost.
    pub fn publish(&self, event: AppEvent) {
        if self.sender.send(event).is_err() {
            log::debug!("Event bus gone, dropping event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewId;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_in_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::SelectRegion);
        publisher.publish(AppEvent::SetTransparency(0.4));
        publisher.publish(AppEvent::CloseView(ViewId(7)));

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                AppEvent::SelectRegion,
                AppEvent::SetTransparency(0.4),
                AppEvent::CloseView(ViewId(7)),
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::SelectRegion);
        assert_eq!(bus.drain().len(), 1);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_cloned_publishers_share_queue() {
        let bus = EventBus::default();
        let pub1 = bus.publisher();
        let pub2 = pub1.clone();

        pub1.publish(AppEvent::SelectRegion);
        pub2.publish(AppEvent::SelectionCancelled);

        assert_eq!(bus.try_recv(), Some(AppEvent::SelectRegion));
        assert_eq!(bus.try_recv(), Some(AppEvent::SelectionCancelled));
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn test_publish_after_bus_dropped_is_silent() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);
        publisher.publish(AppEvent::SelectRegion);
    }
}
