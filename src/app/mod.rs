//! Application-wide state and the helpers that act on every view.

pub mod helpers;
pub mod state;

pub use helpers::{apply_to_all_views, sync_transparency_to_all_views};
pub use state::AppState;
