//! Spatial Index Module
//!
//! R-tree over committed element rectangles, used to resolve a pointer
//! position to the elements underneath it without scanning the registry.

use crate::types::ElementId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// An element's bounding box as stored in the tree.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub id: ElementId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(id: ElementId, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            id,
            min_x: position.0,
            min_y: position.1,
            max_x: position.0 + size.0,
            max_y: position.1 + size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

// Identity is the element id.
impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index for page elements.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ElementId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the rectangle for `id`.
    pub fn insert(&mut self, id: ElementId, position: (f32, f32), size: (f32, f32)) {
        if let Some(old_entry) = self.entries.remove(&id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(id.clone(), position, size);
        self.tree.insert(entry.clone());
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: &ElementId) -> bool {
        if let Some(entry) = self.entries.remove(id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Ids of all rectangles containing the point, in no particular order.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<ElementId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
