//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestEngineBuilder` - Builder for engines with deterministic ids and time
//! - `RecordingHost` - A content host that records mounts and releases
//! - Gesture helpers like `spawn_block()` and `drag()`
//! - Invariant assertions shared by the integration tests

use pagecanvas::clock::ManualClock;
use pagecanvas::content::{ContentHost, MountHandle};
use pagecanvas::ids::{IdSource, SequentialIds};
use pagecanvas::input::ControllerConfig;
use pagecanvas::types::{Margins, PaletteBlock};
use pagecanvas::{
    CanvasEngine, ElementId, GestureOutcome, PageSurface, PointerEvent, PointerTarget,
    SurfaceBounds,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Page used throughout the scenarios: A4 at 96 DPI, rounded down.
pub const PAGE_WIDTH: f32 = 793.0;
pub const PAGE_HEIGHT: f32 = 1122.0;

/// The palette block size used by most scenarios.
pub const BLOCK: (f32, f32) = (340.0, 100.0);

pub const MOUSE: u32 = 1;

// ============================================================================
// TestEngineBuilder
// ============================================================================

/// Builder for engines with sequential ids and a manual clock.
///
/// # Example
/// ```ignore
/// let (mut engine, clock) = TestEngineBuilder::new()
///     .with_margins(Margins::standard())
///     .with_bounds(SurfaceBounds::new(300.0, 0.0, 793.0, 1122.0))
///     .build();
/// ```
pub struct TestEngineBuilder {
    margins: Margins,
    config: ControllerConfig,
    bounds: Option<SurfaceBounds>,
    host: Option<Box<dyn ContentHost>>,
    ids: Option<Box<dyn IdSource>>,
}

impl Default for TestEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEngineBuilder {
    pub fn new() -> Self {
        Self {
            margins: Margins::default(),
            config: ControllerConfig::default(),
            bounds: None,
            host: None,
            ids: None,
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_bounds(mut self, bounds: SurfaceBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_host(mut self, host: impl ContentHost + 'static) -> Self {
        self.host = Some(Box::new(host));
        self
    }

    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    pub fn build(self) -> (CanvasEngine, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let surface = PageSurface::new(PAGE_WIDTH, PAGE_HEIGHT).with_margins(self.margins);
        let mut engine = CanvasEngine::new(surface)
            .with_config(self.config)
            .with_ids(self.ids.unwrap_or_else(|| Box::new(SequentialIds::default())))
            .with_clock(clock.clone());
        if let Some(host) = self.host {
            engine = engine.with_content_host(host);
        }
        if let Some(bounds) = self.bounds {
            engine.set_surface_bounds(bounds);
        }
        (engine, clock)
    }
}

/// An engine on the scenario page with no margins.
pub fn plain_engine() -> (CanvasEngine, Arc<ManualClock>) {
    TestEngineBuilder::new().build()
}

// ============================================================================
// RecordingHost
// ============================================================================

/// Shared log of what a `RecordingHost` was asked to do.
#[derive(Debug, Default)]
pub struct HostLog {
    pub mounted: Vec<(ElementId, MountHandle)>,
    pub released: Vec<(ElementId, MountHandle)>,
}

#[derive(Default)]
pub struct RecordingHost {
    next: u64,
    pub log: Arc<Mutex<HostLog>>,
}

impl ContentHost for RecordingHost {
    fn mount(&mut self, id: &ElementId) -> Option<MountHandle> {
        self.next += 1;
        let handle = MountHandle(self.next);
        self.log.lock().mounted.push((id.clone(), handle));
        Some(handle)
    }

    fn release(&mut self, id: &ElementId, handle: MountHandle) {
        self.log.lock().released.push((id.clone(), handle));
    }
}

// ============================================================================
// ScriptedIds
// ============================================================================

/// Hands out a fixed list of ids, then falls back to `element-N`.
pub struct ScriptedIds {
    script: std::vec::IntoIter<ElementId>,
    fallback: SequentialIds,
}

impl ScriptedIds {
    pub fn new(ids: &[&str]) -> Self {
        let script: Vec<ElementId> = ids.iter().map(|s| id(s)).collect();
        Self {
            script: script.into_iter(),
            fallback: SequentialIds::default(),
        }
    }
}

impl IdSource for ScriptedIds {
    fn next_id(&mut self) -> ElementId {
        self.script.next().unwrap_or_else(|| self.fallback.next_id())
    }
}

// ============================================================================
// Gestures
// ============================================================================

pub fn id(s: &str) -> ElementId {
    ElementId::from(s)
}

pub fn palette(size: (f32, f32)) -> PointerTarget {
    PointerTarget::Palette(PaletteBlock::new(size.0, size.1))
}

/// Drag a palette block from off-page and drop it at `at`.
pub fn spawn_block(engine: &mut CanvasEngine, size: (f32, f32), at: (f32, f32)) -> GestureOutcome {
    engine.handle_pointer(PointerEvent::down(MOUSE, (-200.0, 300.0), palette(size)));
    engine.handle_pointer(PointerEvent::moved(MOUSE, at));
    engine.handle_pointer(PointerEvent::up(MOUSE, at))
}

/// Spawn, then let the drop guard expire so the next spawn is accepted.
pub fn spawn_settled(
    engine: &mut CanvasEngine,
    clock: &ManualClock,
    size: (f32, f32),
    at: (f32, f32),
) -> ElementId {
    let outcome = spawn_block(engine, size, at);
    clock.advance(Duration::from_millis(150));
    match outcome {
        GestureOutcome::Spawned(id) => id,
        other => panic!("expected a spawn, got {other:?}"),
    }
}

/// Press on `target` at `from`, move through each point, release at the last.
pub fn drag(
    engine: &mut CanvasEngine,
    target: PointerTarget,
    from: (f32, f32),
    path: &[(f32, f32)],
) -> GestureOutcome {
    engine.handle_pointer(PointerEvent::down(MOUSE, from, target));
    let mut last = from;
    for point in path {
        engine.handle_pointer(PointerEvent::moved(MOUSE, *point));
        last = *point;
    }
    engine.handle_pointer(PointerEvent::up(MOUSE, last))
}

pub fn position_of(engine: &CanvasEngine, element: &str) -> (f32, f32) {
    engine
        .registry()
        .get(&id(element))
        .map(|e| e.position)
        .unwrap_or_else(|| panic!("no element {element}"))
}

pub fn size_of(engine: &CanvasEngine, element: &str) -> (f32, f32) {
    engine
        .registry()
        .get(&id(element))
        .map(|e| e.size)
        .unwrap_or_else(|| panic!("no element {element}"))
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_element_count(engine: &CanvasEngine, expected: usize) {
    assert_eq!(
        engine.registry().len(),
        expected,
        "Expected {} elements, found {}",
        expected,
        engine.registry().len()
    );
}

/// Every committed element lies inside the clamping region.
pub fn assert_in_bounds(engine: &CanvasEngine) {
    let surface = engine.surface();
    for element in engine.elements() {
        assert!(
            surface.contains_rect(element.position, element.size),
            "{} at {:?} size {:?} escapes the page",
            element.id,
            element.position,
            element.size
        );
    }
}

pub fn assert_single_elevation(engine: &CanvasEngine) {
    let elevated = engine.registry().elevated_count();
    assert!(elevated <= 1, "{elevated} elements elevated at once");
}
