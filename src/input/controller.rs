//! The drag controller: turns pointer events into registry mutations.
//!
//! The controller owns at most one [`DragSession`]. Handlers never return
//! errors; anything that goes wrong is logged and reported as a
//! [`GestureOutcome`] so a broken gesture simply has no effect.

use super::debounce::DropGuard;
use super::ghost::GhostPreview;
use super::pointer::{PointerEvent, PointerId};
use super::state::{DragSession, DragState, SessionKind};
use crate::clamp::ResizeBoundary;
use crate::clock::{Clock, SystemClock};
use crate::constants::{DROP_DEBOUNCE_MS, MIN_ELEMENT_SIZE};
use crate::error::EngineError;
use crate::ids::{IdSource, RandomIds};
use crate::profile_scope;
use crate::registry::ElementRegistry;
use crate::snap::GridSnapper;
use crate::stacking::StackingManager;
use crate::types::{ElementId, ElementPatch, PageSurface, SurfaceBounds};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Tunables for the placement pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    pub grid: GridSnapper,
    pub resize_boundary: ResizeBoundary,
    pub min_element_size: f32,
    /// Snap dragged resize edges to the grid
    pub snap_resize: bool,
    pub drop_debounce: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            grid: GridSnapper::default(),
            resize_boundary: ResizeBoundary::default(),
            min_element_size: MIN_ELEMENT_SIZE,
            snap_resize: true,
            drop_debounce: Duration::from_millis(DROP_DEBOUNCE_MS),
        }
    }
}

/// What a pointer event did.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureOutcome {
    /// The event did not apply (no session, foreign pointer, overlapping gesture)
    Ignored,
    /// Pointer-down refused; the controller stays idle
    Rejected(EngineError),
    Started(DragState),
    GhostMoved { inside: bool },
    /// A new element was committed
    Spawned(ElementId),
    /// A spawn was dropped outside the page
    Discarded,
    /// A spawn arrived while the drop guard was armed
    Debounced,
    Moved(ElementId),
    Resized(ElementId),
    /// A move or resize finished and stacking was restored
    Released(ElementId),
    Cancelled,
}

impl GestureOutcome {
    /// Whether the registry was (or may have been) changed.
    pub fn mutated(&self) -> bool {
        matches!(
            self,
            Self::Spawned(_) | Self::Moved(_) | Self::Resized(_) | Self::Released(_)
        )
    }
}

pub struct DragController {
    pub(super) config: ControllerConfig,
    pub(super) session: Option<DragSession>,
    pub(super) ghost: Option<GhostPreview>,
    surface_bounds: Option<SurfaceBounds>,
    pub(super) drop_guard: DropGuard,
    pub(super) stacking: StackingManager,
    pub(super) ids: Box<dyn IdSource>,
    pub(super) clock: Arc<dyn Clock>,
}

impl DragController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            session: None,
            ghost: None,
            surface_bounds: None,
            drop_guard: DropGuard::new(config.drop_debounce),
            stacking: StackingManager::new(),
            ids: Box::new(RandomIds),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_ids(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Takes effect from the next pointer event.
    pub fn set_config(&mut self, config: ControllerConfig) {
        self.drop_guard.set_window(config.drop_debounce);
        self.config = config;
    }

    /// Live bounds of the page surface, supplied by the view layer each frame.
    pub fn set_surface_bounds(&mut self, bounds: SurfaceBounds) {
        self.surface_bounds = Some(bounds);
    }

    /// Bounds last supplied, or the surface painted at the page origin.
    pub fn surface_bounds(&self, surface: &PageSurface) -> SurfaceBounds {
        self.surface_bounds
            .unwrap_or_else(|| SurfaceBounds::at_origin(surface))
    }

    pub fn state(&self) -> DragState {
        self.session
            .as_ref()
            .map(DragSession::state)
            .unwrap_or_default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn ghost(&self) -> Option<&GhostPreview> {
        self.ghost.as_ref()
    }

    /// Dispatch one pointer event.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        registry: &mut ElementRegistry,
        surface: &PageSurface,
    ) -> GestureOutcome {
        match event {
            PointerEvent::Down {
                pointer,
                position,
                target,
            } => {
                self.handle_pointer_down(*pointer, *position, target, registry, surface)
            }
            PointerEvent::Move { pointer, position } => {
                self.handle_pointer_move(*pointer, *position, registry, surface)
            }
            PointerEvent::Up { pointer, position } => {
                self.handle_pointer_up(*pointer, *position, registry, surface)
            }
            PointerEvent::Cancel { pointer } => self.handle_pointer_cancel(*pointer, registry),
        }
    }

    /// Take the session if `pointer` owns it.
    pub(super) fn take_session_for(&mut self, pointer: PointerId) -> Option<DragSession> {
        let owner = self.session.as_ref()?.pointer;
        if owner != pointer {
            tracing::debug!(
                pointer,
                owner,
                "Ignoring event from a pointer that does not own the gesture"
            );
            return None;
        }
        self.session.take()
    }

    /// Abandon the active gesture: nothing is committed, a moved or
    /// resized element goes back to where it started.
    ///
    /// Elevation is committed on pointer down, so cancelling a move or
    /// resize restores the prior layout through further registry commits
    /// rather than leaving the revision untouched. A spawn cancel commits
    /// nothing.
    pub fn handle_pointer_cancel(
        &mut self,
        pointer: PointerId,
        registry: &mut ElementRegistry,
    ) -> GestureOutcome {
        profile_scope!("pointer_cancel");

        let Some(session) = self.take_session_for(pointer) else {
            return GestureOutcome::Ignored;
        };
        self.ghost = None;

        match session.kind {
            SessionKind::Spawn { .. } => {}
            SessionKind::Move {
                target,
                start_position,
            } => {
                registry.update(
                    &target,
                    ElementPatch::position(start_position.0, start_position.1),
                );
                self.stacking.restore_all(registry);
            }
            SessionKind::Resize {
                target,
                start_position,
                start_size,
                ..
            } => {
                registry.update(&target, ElementPatch::geometry(start_position, start_size));
                self.stacking.restore_all(registry);
            }
        }
        tracing::debug!(pointer, "Gesture cancelled");
        GestureOutcome::Cancelled
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl fmt::Debug for DragController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("ghost", &self.ghost)
            .field("surface_bounds", &self.surface_bounds)
            .field("drop_guard", &self.drop_guard)
            .finish_non_exhaustive()
    }
}
