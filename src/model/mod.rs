//! Application domain model.
//!
//! This module contains pure logic (no windowing dependencies): geometry,
//! the selection gesture, per-view state and scheduling, the view registry
//! and settings.
//!
//! Rendering lives in the binary's `ui` module; file access in `storage`.

pub mod constants;
pub mod geometry;
pub mod region_view;
pub mod registry;
pub mod selection;
pub mod settings;
pub mod timer;

pub use constants::*;
pub use geometry::{Point, Rectangle};
pub use region_view::{RegionView, ViewId};
pub use registry::ViewRegistry;
pub use selection::{SelectionController, SelectionOutcome, SelectionPhase};
pub use settings::{Placement, Settings};
pub use timer::RefreshTimer;
