//! Event handling.
//!
//! This module routes events drained from the bus to a typed handler.

pub mod dispatcher;

pub use dispatcher::{dispatch_event, dispatch_events, EventHandler};
