//! Pointer up handling - commit spawned elements, finalize move and resize.

use super::controller::{DragController, GestureOutcome};
use super::drag::{Frame, apply_frame};
use super::pointer::PointerId;
use super::state::{DragSession, SessionKind};
use crate::clamp::place;
use crate::constants::MAX_ID_ATTEMPTS;
use crate::error::EngineError;
use crate::profile_scope;
use crate::registry::ElementRegistry;
use crate::types::{CanvasElement, PageSurface, PaletteBlock};

impl DragController {
    pub fn handle_pointer_up(
        &mut self,
        pointer: PointerId,
        position: (f32, f32),
        registry: &mut ElementRegistry,
        surface: &PageSurface,
    ) -> GestureOutcome {
        profile_scope!("pointer_up");

        let Some(mut session) = self.take_session_for(pointer) else {
            return GestureOutcome::Ignored;
        };
        session.track(position);

        match session.kind {
            SessionKind::Spawn { block } => {
                self.ghost = None;
                self.commit_spawn(block, position, registry, surface)
            }
            SessionKind::Move { .. } | SessionKind::Resize { .. } => {
                self.finish_manipulation(&session, registry, surface)
            }
        }
    }

    fn commit_spawn(
        &mut self,
        block: PaletteBlock,
        position: (f32, f32),
        registry: &mut ElementRegistry,
        surface: &PageSurface,
    ) -> GestureOutcome {
        let bounds = self.surface_bounds(surface);
        if !bounds.contains(position) {
            tracing::debug!(
                x = position.0,
                y = position.1,
                "Drop outside the page, discarding"
            );
            return GestureOutcome::Discarded;
        }

        let now = self.clock.now();
        if self.drop_guard.is_armed(now) {
            tracing::debug!("Drop guard armed, ignoring duplicate spawn");
            return GestureOutcome::Debounced;
        }

        let size = block.committed_size();
        let (x, y) = place(&self.config.grid, bounds.to_local(position), size, surface);

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            match registry.add(CanvasElement::new(id.clone(), (x, y), size)) {
                Ok(()) => {
                    self.drop_guard.arm(now);
                    tracing::info!(
                        element_id = %id,
                        x,
                        y,
                        width = size.0,
                        height = size.1,
                        "Element spawned"
                    );
                    return GestureOutcome::Spawned(id);
                }
                Err(EngineError::DuplicateId(dup)) => {
                    tracing::warn!(
                        element_id = %dup,
                        attempt,
                        "Generated id already in use, retrying"
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Spawn commit failed");
                    return GestureOutcome::Discarded;
                }
            }
        }

        tracing::error!(
            attempts = MAX_ID_ATTEMPTS,
            "Could not generate a unique element id"
        );
        GestureOutcome::Discarded
    }

    /// Apply the last frame at the release position, then drop the
    /// element back to the baseline tier.
    fn finish_manipulation(
        &mut self,
        session: &DragSession,
        registry: &mut ElementRegistry,
        surface: &PageSurface,
    ) -> GestureOutcome {
        let outcome = match apply_frame(&self.config, session, registry, surface) {
            Some(Frame::Applied(id)) => {
                tracing::debug!(
                    element_id = %id,
                    state = ?session.state(),
                    "Gesture committed"
                );
                GestureOutcome::Released(id)
            }
            Some(Frame::TargetGone(id)) => {
                tracing::debug!(element_id = %id, "Gesture target removed before release");
                GestureOutcome::Ignored
            }
            Some(Frame::Invalid(e)) => {
                tracing::warn!(error = %e, "Discarding final resize frame");
                session
                    .target()
                    .cloned()
                    .map_or(GestureOutcome::Ignored, GestureOutcome::Released)
            }
            None => GestureOutcome::Ignored,
        };
        self.stacking.restore_all(registry);
        outcome
    }
}
