//! Integration tests for pagecanvas.
//!
//! These tests drive complete gestures through `CanvasEngine` and check
//! the registry, stacking and content collaborator together.

mod manipulation_tests;
mod scenario_tests;
