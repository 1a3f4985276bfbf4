//! Constrained canvas interaction engine.
//!
//! Elements are spawned from a palette onto a fixed-size page, then moved
//! and resized with the pointer. Every committed position is snapped to a
//! grid and clamped inside the page's usable area.
//!
//! The engine owns no rendering. A host feeds [`engine::CanvasEngine`]
//! pointer events plus the live page bounds, and renders from the
//! registry or from observer callbacks.

pub mod clamp;
pub mod clock;
pub mod constants;
pub mod content;
pub mod engine;
pub mod error;
pub mod ids;
pub mod input;
pub mod logging;
pub mod perf;
pub mod registry;
pub mod settings;
pub mod settings_watcher;
pub mod snap;
pub mod spatial_index;
pub mod stacking;
pub mod types;

pub use engine::{CanvasEngine, SharedEngine};
pub use error::{EngineError, EngineResult};
pub use input::{GestureOutcome, PointerEvent, PointerTarget};
pub use types::{CanvasElement, ElementId, PageSurface, SurfaceBounds};
