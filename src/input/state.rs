//! Drag state machine - the explicit session behind every gesture.
//!
//! A `DragSession` exists from pointer-down to pointer-up (or cancel) and
//! is owned by the controller; nothing about a gesture lives anywhere else.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> SpawningGhost        (pointer down on a palette block)
//! Idle -> Moving               (pointer down on an element body)
//! Idle -> Resizing             (pointer down on a resize handle)
//!
//! SpawningGhost -> Idle        (pointer up: commit if over the page, else discard)
//! Moving | Resizing -> Idle    (pointer up: commit, restore stacking)
//! Any -> Idle                  (pointer cancel: discard, restore start geometry)
//! ```

use super::pointer::PointerId;
use crate::types::{ElementId, PaletteBlock, ResizeEdges};

/// Observable controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    SpawningGhost,
    Moving,
    Resizing,
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a committed element is being manipulated
    pub fn is_manipulating(&self) -> bool {
        matches!(self, Self::Moving | Self::Resizing)
    }
}

/// What a session does, with the state captured at pointer-down.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionKind {
    Spawn {
        block: PaletteBlock,
    },
    Move {
        target: ElementId,
        /// Position when the gesture started
        start_position: (f32, f32),
    },
    Resize {
        target: ElementId,
        edges: ResizeEdges,
        start_position: (f32, f32),
        start_size: (f32, f32),
    },
}

/// One active gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub pointer: PointerId,
    /// Pointer position at pointer-down
    pub origin: (f32, f32),
    /// Cumulative pointer movement since pointer-down
    pub delta: (f32, f32),
    pub kind: SessionKind,
}

impl DragSession {
    pub fn new(pointer: PointerId, origin: (f32, f32), kind: SessionKind) -> Self {
        Self {
            pointer,
            origin,
            delta: (0.0, 0.0),
            kind,
        }
    }

    pub fn state(&self) -> DragState {
        match self.kind {
            SessionKind::Spawn { .. } => DragState::SpawningGhost,
            SessionKind::Move { .. } => DragState::Moving,
            SessionKind::Resize { .. } => DragState::Resizing,
        }
    }

    /// The element being manipulated; absent for spawn.
    pub fn target(&self) -> Option<&ElementId> {
        match &self.kind {
            SessionKind::Spawn { .. } => None,
            SessionKind::Move { target, .. } | SessionKind::Resize { target, .. } => Some(target),
        }
    }

    pub fn is_owned_by(&self, pointer: PointerId) -> bool {
        self.pointer == pointer
    }

    /// Record the pointer's current position.
    pub fn track(&mut self, position: (f32, f32)) {
        self.delta = (position.0 - self.origin.0, position.1 - self.origin.1);
    }
}
