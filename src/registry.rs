//! Element registry - the single source of truth for rendering.
//!
//! Owns the ordered collection of committed elements, keeps the spatial
//! index in step with their geometry, and notifies observers with the
//! full collection after every committed mutation. Notifications are
//! coarse-grained on purpose: observers re-render from the slice they are
//! handed instead of applying diffs.

use crate::content::MountHandle;
use crate::error::{EngineError, EngineResult};
use crate::spatial_index::SpatialIndex;
use crate::types::{CanvasElement, ElementId, ElementPatch};
use serde::Serialize;
use std::fmt;

/// Callback receiving the full element collection after a mutation.
pub type Observer = Box<dyn FnMut(&[CanvasElement]) + Send>;

/// Handle returned by [`ElementRegistry::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Geometry of one element as handed to a view layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementLayout {
    pub id: ElementId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
    pub z_index: u32,
}

/// Paint-ordered layout of the whole page.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub revision: u64,
    pub elements: Vec<ElementLayout>,
}

pub struct ElementRegistry {
    elements: Vec<CanvasElement>,
    spatial: SpatialIndex,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    revision: u64,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            spatial: SpatialIndex::new(),
            observers: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: &ElementId) -> Option<&CanvasElement> {
        self.index_of(id).map(|i| &self.elements[i])
    }

    fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    /// Elements in insertion order. The iterator is `Clone`, so a caller
    /// can restart it without touching the registry again.
    pub fn all(&self) -> std::slice::Iter<'_, CanvasElement> {
        self.elements.iter()
    }

    /// Elements in paint order: baseline elements in insertion order, then
    /// the elevated one on top.
    pub fn paint_order(&self) -> impl Iterator<Item = &CanvasElement> + Clone + '_ {
        let baseline = self.elements.iter().filter(|e| !e.is_elevated());
        let elevated = self.elements.iter().filter(|e| e.is_elevated());
        baseline.chain(elevated)
    }

    /// The currently elevated element, if any.
    pub fn elevated(&self) -> Option<&CanvasElement> {
        self.elements.iter().find(|e| e.is_elevated())
    }

    pub fn elevated_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_elevated()).count()
    }

    /// Topmost visible element under a page-local point.
    pub fn element_at(&self, x: f32, y: f32) -> Option<&CanvasElement> {
        let candidates = self.spatial.query_point(x, y);
        if candidates.is_empty() {
            return None;
        }
        self.paint_order()
            .filter(|e| e.visible && candidates.contains(&e.id))
            .last()
    }

    /// Number of committed mutations since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            revision: self.revision,
            elements: self
                .paint_order()
                .map(|e| ElementLayout {
                    id: e.id.clone(),
                    x: e.position.0,
                    y: e.position.1,
                    width: e.size.0,
                    height: e.size.1,
                    visible: e.visible,
                    z_index: e.z_index(),
                })
                .collect(),
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new element.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if an element with the same id exists; the
    /// caller retries with a fresh id.
    pub fn add(&mut self, element: CanvasElement) -> EngineResult<()> {
        if self.contains(&element.id) {
            return Err(EngineError::DuplicateId(element.id));
        }
        self.spatial.insert(element.id.clone(), element.position, element.size);
        tracing::debug!(
            element_id = %element.id,
            x = element.position.0,
            y = element.position.1,
            "Element added"
        );
        self.elements.push(element);
        self.commit();
        Ok(())
    }

    /// Apply a patch.
    ///
    /// # Errors
    ///
    /// Returns `UnknownElement` if `id` is not registered. Returns `Ok(false)`
    /// when the patch changes nothing; observers are then not notified.
    pub fn try_update(&mut self, id: &ElementId, patch: &ElementPatch) -> EngineResult<bool> {
        let index = self
            .index_of(id)
            .ok_or_else(|| EngineError::UnknownElement(id.clone()))?;
        let changed = self.apply_at(index, patch);
        if changed {
            self.commit();
        }
        Ok(changed)
    }

    /// Apply a patch, treating a missing id as a silent no-op: a late event
    /// for a removed element is not an error.
    pub fn update(&mut self, id: &ElementId, patch: ElementPatch) -> bool {
        match self.try_update(id, &patch) {
            Ok(changed) => changed,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring update");
                false
            }
        }
    }

    /// Apply several patches with a single notification. Unknown ids are
    /// skipped. Returns how many elements changed.
    pub fn update_many<I>(&mut self, patches: I) -> usize
    where
        I: IntoIterator<Item = (ElementId, ElementPatch)>,
    {
        let mut changed = 0;
        for (id, patch) in patches {
            match self.index_of(&id) {
                Some(index) => {
                    if self.apply_at(index, &patch) {
                        changed += 1;
                    }
                }
                None => tracing::debug!(element_id = %id, "Ignoring batched update"),
            }
        }
        if changed > 0 {
            self.commit();
        }
        changed
    }

    fn apply_at(&mut self, index: usize, patch: &ElementPatch) -> bool {
        let element = &mut self.elements[index];
        let changed = patch.apply(element);
        if changed && patch.touches_geometry() {
            self.spatial.insert(element.id.clone(), element.position, element.size);
        }
        changed
    }

    /// Record the content mounted for an element.
    ///
    /// # Errors
    ///
    /// Returns `UnknownElement` if `id` is not registered.
    pub fn attach_content(&mut self, id: &ElementId, handle: MountHandle) -> EngineResult<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| EngineError::UnknownElement(id.clone()))?;
        self.elements[index].content = Some(handle);
        self.commit();
        Ok(())
    }

    /// Remove an element, returning it so its content can be released.
    pub fn remove(&mut self, id: &ElementId) -> Option<CanvasElement> {
        let index = self.index_of(id)?;
        let element = self.elements.remove(index);
        self.spatial.remove(id);
        tracing::debug!(element_id = %id, "Element removed");
        self.commit();
        Some(element)
    }

    // ========================================================================
    // Observers
    // ========================================================================

    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn commit(&mut self) {
        self.revision += 1;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.elements);
        }
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRegistry")
            .field("elements", &self.elements)
            .field("observers", &self.observers.len())
            .field("revision", &self.revision)
            .finish()
    }
}
