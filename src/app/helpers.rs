//! Helpers that operate on all live views.

use crate::model::{RegionView, ViewRegistry};

/// Apply a closure to every registered view, in creation order.
pub fn apply_to_all_views<F: FnMut(&mut RegionView)>(views: &mut ViewRegistry, f: F) {
    views.iter_mut().for_each(f);
}

/// Push the shared transparency value to every view.
pub fn sync_transparency_to_all_views(views: &mut ViewRegistry, value: f32) {
    apply_to_all_views(views, |v| v.set_transparency(value));
}
