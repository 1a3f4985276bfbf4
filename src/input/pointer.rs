//! Pointer events consumed by the drag controller.
//!
//! Positions are absolute view coordinates in the same unit as the page
//! surface; the live [`SurfaceBounds`](crate::types::SurfaceBounds) map
//! them onto the page. The view layer resolves what was under the pointer
//! on pointer-down (see [`hit_test`](super::hit_test) when it only has
//! coordinates).

use crate::types::{ElementId, PaletteBlock, ResizeEdges};

/// Identifies an input device (mouse, pen, a touch contact).
pub type PointerId = u32;

/// What a pointer-down landed on.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerTarget {
    /// A palette affordance; starts a spawn gesture
    Palette(PaletteBlock),
    /// The body of a committed element; starts a move gesture
    Element(ElementId),
    /// A resize handle of a committed element
    ResizeHandle { id: ElementId, edges: ResizeEdges },
    /// Nothing interactive
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Down {
        pointer: PointerId,
        position: (f32, f32),
        target: PointerTarget,
    },
    Move {
        pointer: PointerId,
        position: (f32, f32),
    },
    Up {
        pointer: PointerId,
        position: (f32, f32),
    },
    /// Abnormal termination, e.g. lost pointer capture
    Cancel { pointer: PointerId },
}

impl PointerEvent {
    pub fn down(pointer: PointerId, position: (f32, f32), target: PointerTarget) -> Self {
        Self::Down {
            pointer,
            position,
            target,
        }
    }

    pub fn moved(pointer: PointerId, position: (f32, f32)) -> Self {
        Self::Move { pointer, position }
    }

    pub fn up(pointer: PointerId, position: (f32, f32)) -> Self {
        Self::Up { pointer, position }
    }

    pub fn cancel(pointer: PointerId) -> Self {
        Self::Cancel { pointer }
    }

    pub fn pointer(&self) -> PointerId {
        match self {
            Self::Down { pointer, .. }
            | Self::Move { pointer, .. }
            | Self::Up { pointer, .. }
            | Self::Cancel { pointer } => *pointer,
        }
    }

    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::Down { position, .. }
            | Self::Move { position, .. }
            | Self::Up { position, .. } => Some(*position),
            Self::Cancel { .. } => None,
        }
    }
}
