//! Stacking order management.
//!
//! At most one element is elevated at any instant. Elevating an element
//! demotes whatever else is elevated in the same registry commit, so an
//! observer can never see two active elements.

use crate::error::{EngineError, EngineResult};
use crate::registry::ElementRegistry;
use crate::types::{ElementId, ElementPatch, StackingTier};

#[derive(Debug, Default, Clone, Copy)]
pub struct StackingManager;

impl StackingManager {
    pub fn new() -> Self {
        Self
    }

    /// Raise `id` above every baseline element.
    ///
    /// # Errors
    ///
    /// Returns `UnknownElement` if `id` is not registered; nothing changes.
    pub fn try_elevate(&self, registry: &mut ElementRegistry, id: &ElementId) -> EngineResult<()> {
        if !registry.contains(id) {
            return Err(EngineError::UnknownElement(id.clone()));
        }
        let patches: Vec<(ElementId, ElementPatch)> = registry
            .all()
            .filter_map(|e| {
                let tier = if &e.id == id {
                    StackingTier::Active
                } else {
                    StackingTier::Baseline
                };
                (e.stacking != tier).then(|| (e.id.clone(), ElementPatch::stacking(tier)))
            })
            .collect();
        registry.update_many(patches);
        Ok(())
    }

    /// Like [`try_elevate`](Self::try_elevate), absorbing an unknown id.
    pub fn elevate(&self, registry: &mut ElementRegistry, id: &ElementId) -> bool {
        match self.try_elevate(registry, id) {
            Ok(()) => true,
            Err(e) if e.is_benign() => {
                tracing::debug!(error = %e, "Cannot elevate");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cannot elevate");
                false
            }
        }
    }

    /// Return every element to the baseline tier.
    pub fn restore_all(&self, registry: &mut ElementRegistry) {
        let patches: Vec<(ElementId, ElementPatch)> = registry
            .all()
            .filter(|e| e.is_elevated())
            .map(|e| (e.id.clone(), ElementPatch::stacking(StackingTier::Baseline)))
            .collect();
        registry.update_many(patches);
    }
}
