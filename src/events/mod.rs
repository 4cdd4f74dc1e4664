//! Event system for decoupled communication between windows and the app.
//!
//! Windows never mutate application state directly. They publish a typed
//! [`AppEvent`]; once per frame the app drains the bus and the dispatcher
//! routes each event to an [`EventHandler`](crate::handlers::EventHandler)
//! method.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Main window │     │   Overlay   │     │ Region views│
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │            Dispatcher → EventHandler (AppState)     │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
