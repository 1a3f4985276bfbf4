//! Pointer input handling for the page canvas.
//!
//! This module implements all gesture logic: spawning elements from the
//! palette, moving committed elements and resizing them by their edges.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`DragState`) backed by
//! a single owned `DragSession`. The controller never reads view state; the
//! view layer hands it pointer events and the live surface bounds.
//!
//! ## Modules
//!
//! - `state` - Drag state machine and session
//! - `pointer` - Pointer event and target types
//! - `pointer_down` - Gesture start (spawn, move, resize)
//! - `drag` - Pointer move handling (ghost, live move, live resize)
//! - `pointer_up` - Gesture end (commit spawn, finalize move/resize)
//! - `ghost` - Ghost preview for palette drags
//! - `debounce` - Duplicate-drop guard
//! - `hit_test` - Point to target resolution

mod controller;
mod debounce;
mod drag;
mod ghost;
mod pointer;
mod pointer_down;
mod pointer_up;
mod state;

pub use controller::{ControllerConfig, DragController, GestureOutcome};
pub use debounce::DropGuard;
pub use ghost::{DropCue, GhostPreview};
pub use pointer::{PointerEvent, PointerId, PointerTarget};
pub use state::{DragSession, DragState, SessionKind};
