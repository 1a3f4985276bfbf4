//! Core types for the page canvas.
//!
//! This module defines the geometry and element records shared by the
//! placement pipeline, the registry and the drag controller.

use crate::constants::{
    BASELINE_Z_INDEX, DEFAULT_DPI, ELEVATED_Z_INDEX, MM_PER_INCH, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
    STANDARD_MARGIN,
};
use crate::content::MountHandle;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identity
// ============================================================================

/// Opaque, process-unique element identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ============================================================================
// Page Surface
// ============================================================================

/// Insets excluded from placement. There is no bottom margin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
}

impl Margins {
    pub fn uniform(value: f32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
        }
    }

    /// The inset used by printed page templates.
    pub fn standard() -> Self {
        Self::uniform(STANDARD_MARGIN)
    }
}

/// The fixed-size page elements are placed on. Immutable for a session.
///
/// The clamping region for an element of size `w x h` is
/// `[margins.left, width - w - margins.right] x [margins.top, height - h]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageSurface {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Derive the surface from a physical page size at a given resolution.
    pub fn from_physical(width_mm: f32, height_mm: f32, dpi: f32) -> Self {
        let px_per_mm = dpi / MM_PER_INCH;
        Self::new(width_mm * px_per_mm, height_mm * px_per_mm)
    }

    /// A4 at 96 DPI (about 793.7 x 1122.5).
    pub fn a4() -> Self {
        Self::from_physical(PAGE_WIDTH_MM, PAGE_HEIGHT_MM, DEFAULT_DPI)
    }

    pub fn min_x(&self) -> f32 {
        self.margins.left
    }

    pub fn min_y(&self) -> f32 {
        self.margins.top
    }

    /// Largest x a `width`-wide element may take.
    pub fn max_x(&self, width: f32) -> f32 {
        self.width - width - self.margins.right
    }

    /// Largest y a `height`-tall element may take.
    pub fn max_y(&self, height: f32) -> f32 {
        self.height - height
    }

    /// Whether a rectangle sits inside the clamping region.
    pub fn contains_rect(&self, position: (f32, f32), size: (f32, f32)) -> bool {
        position.0 >= self.min_x()
            && position.0 <= self.max_x(size.0)
            && position.1 >= self.min_y()
            && position.1 <= self.max_y(size.1)
    }
}

impl Default for PageSurface {
    fn default() -> Self {
        Self::a4()
    }
}

/// Live bounding rectangle of the page surface in view coordinates,
/// supplied by the view layer once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounds of a surface painted at the page origin.
    pub fn at_origin(surface: &PageSurface) -> Self {
        Self::new(0.0, 0.0, surface.width, surface.height)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Strict containment: a pointer exactly on the border is outside.
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 > self.left
            && point.0 < self.right()
            && point.1 > self.top
            && point.1 < self.bottom()
    }

    /// Convert a view point to surface-local coordinates.
    pub fn to_local(&self, point: (f32, f32)) -> (f32, f32) {
        (point.0 - self.left, point.1 - self.top)
    }
}

// ============================================================================
// Canvas Elements
// ============================================================================

/// Relative paint-order classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackingTier {
    #[default]
    Baseline,
    /// Drawn above every baseline element while a gesture is active
    Active,
}

impl StackingTier {
    pub fn z_index(self) -> u32 {
        match self {
            Self::Baseline => BASELINE_Z_INDEX,
            Self::Active => ELEVATED_Z_INDEX,
        }
    }
}

/// A content block committed to the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasElement {
    /// Unique identifier, stable for the element's lifetime
    pub id: ElementId,
    /// Top-left corner in page-local coordinates (x, y)
    pub position: (f32, f32),
    /// Size (width, height); changes only through a resize gesture
    pub size: (f32, f32),
    pub visible: bool,
    pub stacking: StackingTier,
    /// Mount point handed out by the content host, if any
    #[serde(skip)]
    pub content: Option<MountHandle>,
}

impl CanvasElement {
    /// A visible, baseline element with no content mounted yet.
    pub fn new(id: ElementId, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            id,
            position,
            size,
            visible: true,
            stacking: StackingTier::Baseline,
            content: None,
        }
    }

    pub fn z_index(&self) -> u32 {
        self.stacking.z_index()
    }

    pub fn is_elevated(&self) -> bool {
        self.stacking == StackingTier::Active
    }
}

/// A partial change to an element. Unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementPatch {
    pub position: Option<(f32, f32)>,
    pub size: Option<(f32, f32)>,
    pub visible: Option<bool>,
    pub stacking: Option<StackingTier>,
}

impl ElementPatch {
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            position: Some((x, y)),
            ..Default::default()
        }
    }

    pub fn stacking(tier: StackingTier) -> Self {
        Self {
            stacking: Some(tier),
            ..Default::default()
        }
    }

    pub fn geometry(position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            position: Some(position),
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Whether the patch touches position or size.
    pub fn touches_geometry(&self) -> bool {
        self.position.is_some() || self.size.is_some()
    }

    /// Apply to an element. Returns true if anything changed.
    pub fn apply(&self, element: &mut CanvasElement) -> bool {
        let before = (element.position, element.size, element.visible, element.stacking);
        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(size) = self.size {
            element.size = size;
        }
        if let Some(visible) = self.visible {
            element.visible = visible;
        }
        if let Some(stacking) = self.stacking {
            element.stacking = stacking;
        }
        before != (element.position, element.size, element.visible, element.stacking)
    }
}

// ============================================================================
// Palette & Resize Handles
// ============================================================================

/// A palette affordance that can be dragged onto the page.
/// The size is captured from the affordance when the drag starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteBlock {
    pub width: f32,
    pub height: f32,
}

impl PaletteBlock {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Committed sizes are whole units, like the rendered affordance.
    pub fn committed_size(&self) -> (f32, f32) {
        (self.width.ceil(), self.height.ceil())
    }
}

/// Which edges a resize gesture drags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeEdges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl ResizeEdges {
    pub const LEFT: Self = Self {
        left: true,
        right: false,
        top: false,
        bottom: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
        top: false,
        bottom: false,
    };
    pub const TOP: Self = Self {
        left: false,
        right: false,
        top: true,
        bottom: false,
    };
    pub const BOTTOM: Self = Self {
        left: false,
        right: false,
        top: false,
        bottom: true,
    };
    pub const TOP_LEFT: Self = Self::TOP.union(Self::LEFT);
    pub const TOP_RIGHT: Self = Self::TOP.union(Self::RIGHT);
    pub const BOTTOM_LEFT: Self = Self::BOTTOM.union(Self::LEFT);
    pub const BOTTOM_RIGHT: Self = Self::BOTTOM.union(Self::RIGHT);

    pub const fn union(self, other: Self) -> Self {
        Self {
            left: self.left || other.left,
            right: self.right || other.right,
            top: self.top || other.top,
            bottom: self.bottom || other.bottom,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.left || self.right || self.top || self.bottom)
    }
}
