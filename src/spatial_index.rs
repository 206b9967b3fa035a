//! Spatial Index Module
//!
//! R-tree over box frames for pointer hit testing. The index only narrows the
//! candidate set; the controller still resolves ties by insertion order, so
//! results do not depend on tree layout.

use crate::geometry::{Point, Rect};
use crate::types::BoxId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A box frame as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub box_id: BoxId,
    pub frame: Rect,
}

impl SpatialEntry {
    pub fn new(box_id: BoxId, frame: Rect) -> Self {
        Self { box_id, frame }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.frame.min_x(), self.frame.min_y()],
            [self.frame.max_x(), self.frame.max_y()],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.box_id == other.box_id
    }
}

pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<BoxId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the frame stored for `box_id`.
    pub fn insert(&mut self, box_id: BoxId, frame: Rect) {
        if let Some(old_entry) = self.entries.remove(&box_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(box_id, frame);
        self.tree.insert(entry);
        self.entries.insert(box_id, entry);
    }

    pub fn remove(&mut self, box_id: BoxId) -> bool {
        if let Some(entry) = self.entries.remove(&box_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, box_id: BoxId, frame: Rect) {
        self.insert(box_id, frame);
    }

    /// All boxes whose frame contains `point` (half-open, see `Rect::contains`).
    /// Order is unspecified.
    pub fn query_point(&self, point: Point) -> Vec<BoxId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.frame.contains(point))
            .map(|entry| entry.box_id)
            .collect()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
