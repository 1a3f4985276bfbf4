//! Ghost preview shown while a palette block is being dragged.
//!
//! The ghost is never committed. It only tracks the pointer so the view
//! layer can paint a stand-in and tilt it when a drop would be rejected.

use crate::constants::{GHOST_INVALID_TILT_DEG, GHOST_VALID_TILT_DEG};
use crate::types::SurfaceBounds;

/// Drop feedback for the ghost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropCue {
    /// Releasing here commits a new element
    Valid,
    /// Releasing here discards the gesture
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GhostPreview {
    /// Top-left corner in page coordinates
    pub position: (f32, f32),
    /// Size captured from the palette affordance
    pub size: (f32, f32),
    pub inside_surface: bool,
}

impl GhostPreview {
    /// A ghost centered on the pointer.
    pub fn new(pointer: (f32, f32), size: (f32, f32), surface: &SurfaceBounds) -> Self {
        let mut ghost = Self {
            position: (0.0, 0.0),
            size,
            inside_surface: false,
        };
        ghost.track(pointer, surface);
        ghost
    }

    /// Follow the pointer and re-test it against the live surface bounds.
    pub fn track(&mut self, pointer: (f32, f32), surface: &SurfaceBounds) {
        self.position = (pointer.0 - self.size.0 / 2.0, pointer.1 - self.size.1 / 2.0);
        self.inside_surface = surface.contains(pointer);
    }

    pub fn cue(&self) -> DropCue {
        if self.inside_surface {
            DropCue::Valid
        } else {
            DropCue::Invalid
        }
    }

    pub fn tilt_degrees(&self) -> f32 {
        match self.cue() {
            DropCue::Valid => GHOST_VALID_TILT_DEG,
            DropCue::Invalid => GHOST_INVALID_TILT_DEG,
        }
    }
}
