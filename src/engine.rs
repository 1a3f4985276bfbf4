//! The canvas engine facade.
//!
//! Wires the drag controller to the element registry and the content
//! collaborator. A host feeds it pointer events and live surface bounds,
//! and renders from the registry (or its observers).

use crate::clock::Clock;
use crate::constants::RESIZE_HANDLE_BAND;
use crate::content::{ContentHost, DetachedContent};
use crate::ids::IdSource;
use crate::input::hit_test::resolve_target;
use crate::input::{
    ControllerConfig, DragController, DragState, GestureOutcome, GhostPreview, PointerEvent,
    PointerId,
};
use crate::perf::{HandlerStats, measure};
use crate::registry::{ElementRegistry, LayoutSnapshot, Observer, SubscriptionId};
use crate::settings::EngineSettings;
use crate::types::{CanvasElement, ElementId, PageSurface, SurfaceBounds};
use anyhow::Context;
use parking_lot::Mutex;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// An engine shared between threads. Every mutation goes through the lock.
pub type SharedEngine = Arc<Mutex<CanvasEngine>>;

pub struct CanvasEngine {
    surface: PageSurface,
    registry: ElementRegistry,
    controller: DragController,
    content: Box<dyn ContentHost>,
    stats: HandlerStats,
}

impl CanvasEngine {
    pub fn new(surface: PageSurface) -> Self {
        Self {
            surface,
            registry: ElementRegistry::new(),
            controller: DragController::default(),
            content: Box::new(DetachedContent),
            stats: HandlerStats::new(),
        }
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.controller.set_config(config);
        self
    }

    pub fn with_ids(mut self, ids: Box<dyn IdSource>) -> Self {
        self.controller = self.controller.with_ids(ids);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.controller = self.controller.with_clock(clock);
        self
    }

    pub fn with_content_host(mut self, content: Box<dyn ContentHost>) -> Self {
        self.content = content;
        self
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(settings.page_surface()).with_config(settings.controller_config())
    }

    /// Build an engine from a settings file.
    pub fn from_settings_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let settings = EngineSettings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?;
        Ok(Self::from_settings(&settings))
    }

    pub fn into_shared(self) -> SharedEngine {
        Arc::new(Mutex::new(self))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn surface(&self) -> &PageSurface {
        &self.surface
    }

    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Committed elements in insertion order.
    pub fn elements(&self) -> std::slice::Iter<'_, CanvasElement> {
        self.registry.all()
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn state(&self) -> DragState {
        self.controller.state()
    }

    pub fn ghost(&self) -> Option<&GhostPreview> {
        self.controller.ghost()
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        self.registry.snapshot()
    }

    pub fn stats(&self) -> &HandlerStats {
        &self.stats
    }

    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        self.registry.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.registry.unsubscribe(id)
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Live surface bounds from the view layer.
    pub fn set_surface_bounds(&mut self, bounds: SurfaceBounds) {
        self.controller.set_surface_bounds(bounds);
    }

    /// Process one pointer event. Never fails; see [`GestureOutcome`].
    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        let handler = handler_name(&event);
        let (outcome, elapsed_ms) =
            measure(|| self.controller.handle(&event, &mut self.registry, &self.surface));
        self.stats.record(handler, elapsed_ms);

        if let GestureOutcome::Spawned(id) = &outcome {
            self.mount_content(id);
        }
        outcome
    }

    /// Pointer down at a view position, resolving the target by hit
    /// testing committed elements.
    pub fn pointer_down_at(&mut self, pointer: PointerId, position: (f32, f32)) -> GestureOutcome {
        let local = self.controller.surface_bounds(&self.surface).to_local(position);
        let target = resolve_target(&self.registry, local, RESIZE_HANDLE_BAND);
        self.handle_pointer(PointerEvent::down(pointer, position, target))
    }

    fn mount_content(&mut self, id: &ElementId) {
        let Some(handle) = self.content.mount(id) else {
            return;
        };
        if let Err(e) = self.registry.attach_content(id, handle) {
            tracing::warn!(
                element_id = %id,
                error = %e,
                "Could not attach content, releasing"
            );
            self.content.release(id, handle);
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Remove an element and release its content mount.
    pub fn remove_element(&mut self, id: &ElementId) -> bool {
        let Some(element) = self.registry.remove(id) else {
            tracing::debug!(element_id = %id, "Remove of unknown element ignored");
            return false;
        };
        if let Some(handle) = element.content {
            self.content.release(id, handle);
        }
        true
    }

    /// Re-apply reloadable settings. Page geometry is fixed for the
    /// engine's lifetime. Invalid settings are logged and ignored.
    pub fn apply_settings(&mut self, settings: &EngineSettings) {
        if let Err(e) = settings.validate() {
            tracing::warn!(error = %e, "Ignoring invalid settings");
            return;
        }
        self.controller.set_config(settings.controller_config());
        if settings.page_surface() != self.surface {
            tracing::warn!("Page geometry changed in settings; it applies to new engines only");
        }
        tracing::info!(grid_unit = settings.grid_unit, "Settings applied");
    }
}

fn handler_name(event: &PointerEvent) -> &'static str {
    match event {
        PointerEvent::Down { .. } => "pointer_down",
        PointerEvent::Move { .. } => "pointer_move",
        PointerEvent::Up { .. } => "pointer_up",
        PointerEvent::Cancel { .. } => "pointer_cancel",
    }
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new(PageSurface::a4())
    }
}

impl fmt::Debug for CanvasEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasEngine")
            .field("surface", &self.surface)
            .field("registry", &self.registry)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}
