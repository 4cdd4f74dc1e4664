//! Live region views, keyed by id.
//!
//! Ids are handed out in increasing order, so iterating the map visits
//! views in creation order.

use std::collections::BTreeMap;
use std::time::Instant;

use super::geometry::Rectangle;
use super::region_view::{RegionView, ViewId};
use super::settings::Settings;

#[derive(Debug, Default)]
pub struct ViewRegistry {
    next_id: u64,
    views: BTreeMap<ViewId, RegionView>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a view for `source`.
    pub fn create(&mut self, source: Rectangle, settings: &Settings, now: Instant) -> ViewId {
        let id = ViewId(self.next_id);
        self.next_id += 1;
        self.views.insert(id, RegionView::new(id, source, settings, now));
        id
    }

    pub fn get(&self, id: ViewId) -> Option<&RegionView> {
        self.views.get(&id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut RegionView> {
        self.views.get_mut(&id)
    }

    /// Deregister a view. It is closed (timer cancelled) before it is returned.
    pub fn remove(&mut self, id: ViewId) -> Option<RegionView> {
        let mut view = self.views.remove(&id)?;
        view.close();
        Some(view)
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(&id)
    }

    pub fn ids(&self) -> Vec<ViewId> {
        self.views.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionView> {
        self.views.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RegionView> {
        self.views.values_mut()
    }
}
