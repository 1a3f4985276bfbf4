//! Pointer move handling - ghost tracking, live move and resize.
//!
//! ## Performance Notes
//!
//! Pointer move arrives many times per frame during a gesture. Each frame
//! touches at most one element and commits at most one registry update;
//! frames that land on the same snapped cell commit nothing.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::controller::{ControllerConfig, DragController, GestureOutcome};
use super::pointer::PointerId;
use super::state::{DragSession, SessionKind};
use crate::clamp::{ResizeRequest, place, resize_rect};
use crate::error::{EngineError, validate_size};
use crate::profile_scope;
use crate::registry::ElementRegistry;
use crate::types::{ElementId, ElementPatch, PageSurface};

/// Result of applying the session's current delta to its target.
pub(super) enum Frame {
    Applied(ElementId),
    /// The target was removed while the gesture was running
    TargetGone(ElementId),
    Invalid(EngineError),
}

/// Apply one move or resize frame. Spawn sessions have no target and are
/// never passed here.
pub(super) fn apply_frame(
    config: &ControllerConfig,
    session: &DragSession,
    registry: &mut ElementRegistry,
    surface: &PageSurface,
) -> Option<Frame> {
    let (dx, dy) = session.delta;
    let frame = match &session.kind {
        SessionKind::Spawn { .. } => return None,
        SessionKind::Move {
            target,
            start_position,
        } => {
            let Some(element) = registry.get(target) else {
                return Some(Frame::TargetGone(target.clone()));
            };
            let raw = (start_position.0 + dx, start_position.1 + dy);
            let (x, y) = place(&config.grid, raw, element.size, surface);
            registry.update(target, ElementPatch::position(x, y));
            Frame::Applied(target.clone())
        }
        SessionKind::Resize {
            target,
            edges,
            start_position,
            start_size,
        } => {
            if !registry.contains(target) {
                return Some(Frame::TargetGone(target.clone()));
            }
            let request = ResizeRequest {
                start_position: *start_position,
                start_size: *start_size,
                edges: *edges,
                delta: session.delta,
                min_size: config.min_element_size,
            };
            let snapper = config.snap_resize.then_some(&config.grid);
            let (position, size) = resize_rect(&request, snapper, surface, config.resize_boundary);
            if let Err(e) = validate_size(size.0, size.1) {
                return Some(Frame::Invalid(e));
            }
            registry.update(target, ElementPatch::geometry(position, size));
            Frame::Applied(target.clone())
        }
    };
    Some(frame)
}

impl DragController {
    pub fn handle_pointer_move(
        &mut self,
        pointer: PointerId,
        position: (f32, f32),
        registry: &mut ElementRegistry,
        surface: &PageSurface,
    ) -> GestureOutcome {
        profile_scope!("pointer_move");

        // Early exit: nothing in progress
        let Some(session) = self.session.as_mut() else {
            return GestureOutcome::Ignored;
        };
        if !session.is_owned_by(pointer) {
            tracing::trace!(
                pointer,
                owner = session.pointer,
                "Ignoring foreign pointer move"
            );
            return GestureOutcome::Ignored;
        }
        session.track(position);

        if matches!(session.kind, SessionKind::Spawn { .. }) {
            let bounds = self.surface_bounds(surface);
            return match self.ghost.as_mut() {
                Some(ghost) => {
                    ghost.track(position, &bounds);
                    GestureOutcome::GhostMoved {
                        inside: ghost.inside_surface,
                    }
                }
                None => GestureOutcome::Ignored,
            };
        }

        let Some(session) = self.session.as_ref() else {
            return GestureOutcome::Ignored;
        };
        let resizing = matches!(session.kind, SessionKind::Resize { .. });
        match apply_frame(&self.config, session, registry, surface) {
            Some(Frame::Applied(id)) if resizing => GestureOutcome::Resized(id),
            Some(Frame::Applied(id)) => GestureOutcome::Moved(id),
            Some(Frame::TargetGone(id)) => {
                tracing::debug!(element_id = %id, "Gesture target removed, ending gesture");
                self.session = None;
                self.stacking.restore_all(registry);
                GestureOutcome::Ignored
            }
            Some(Frame::Invalid(e)) => {
                tracing::warn!(error = %e, "Skipping resize frame");
                GestureOutcome::Ignored
            }
            None => GestureOutcome::Ignored,
        }
    }
}
