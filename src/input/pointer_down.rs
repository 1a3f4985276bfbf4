//! Pointer down handling - starts spawn, move and resize gestures.

use super::controller::{DragController, GestureOutcome};
use super::ghost::GhostPreview;
use super::pointer::{PointerId, PointerTarget};
use super::state::{DragSession, SessionKind};
use crate::error::{EngineError, validate_size};
use crate::profile_scope;
use crate::registry::ElementRegistry;
use crate::types::PageSurface;

impl DragController {
    pub fn handle_pointer_down(
        &mut self,
        pointer: PointerId,
        position: (f32, f32),
        target: &PointerTarget,
        registry: &mut ElementRegistry,
        surface: &PageSurface,
    ) -> GestureOutcome {
        profile_scope!("pointer_down");

        // Gestures never overlap
        if let Some(active) = &self.session {
            tracing::debug!(
                pointer,
                owner = active.pointer,
                state = ?active.state(),
                "Ignoring pointer down while a gesture is active"
            );
            return GestureOutcome::Ignored;
        }

        let kind = match target {
            PointerTarget::Palette(block) => {
                if let Err(e) = validate_size(block.width, block.height) {
                    tracing::warn!(error = %e, "Rejecting palette block");
                    return GestureOutcome::Rejected(e);
                }
                let bounds = self.surface_bounds(surface);
                self.ghost = Some(GhostPreview::new(
                    position,
                    (block.width, block.height),
                    &bounds,
                ));
                SessionKind::Spawn { block: *block }
            }
            PointerTarget::Element(id) => {
                let Some(element) = registry.get(id) else {
                    let e = EngineError::UnknownElement(id.clone());
                    tracing::debug!(error = %e, "Pointer down on a missing element");
                    return GestureOutcome::Rejected(e);
                };
                let kind = SessionKind::Move {
                    target: id.clone(),
                    start_position: element.position,
                };
                self.stacking.elevate(registry, id);
                kind
            }
            PointerTarget::ResizeHandle { id, edges } => {
                if edges.is_empty() {
                    return GestureOutcome::Ignored;
                }
                let Some(element) = registry.get(id) else {
                    let e = EngineError::UnknownElement(id.clone());
                    tracing::debug!(error = %e, "Pointer down on a missing element");
                    return GestureOutcome::Rejected(e);
                };
                if let Err(e) = validate_size(element.size.0, element.size.1) {
                    tracing::warn!(element_id = %id, error = %e, "Refusing to resize");
                    return GestureOutcome::Rejected(e);
                }
                let kind = SessionKind::Resize {
                    target: id.clone(),
                    edges: *edges,
                    start_position: element.position,
                    start_size: element.size,
                };
                self.stacking.elevate(registry, id);
                kind
            }
            PointerTarget::Empty => return GestureOutcome::Ignored,
        };

        let session = DragSession::new(pointer, position, kind);
        let state = session.state();
        tracing::debug!(
            pointer,
            ?state,
            x = position.0,
            y = position.1,
            "Gesture started"
        );
        self.session = Some(session);
        GestureOutcome::Started(state)
    }
}
