//! Engine-wide constants.
//!
//! Centralizes page geometry, grid and stacking values so the placement
//! pipeline and its tests agree on the same numbers.

// ============================================================================
// Page Geometry
// ============================================================================

/// Physical page width (A4) in millimetres
pub const PAGE_WIDTH_MM: f32 = 210.0;

/// Physical page height (A4) in millimetres
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Default rendering resolution (pixels per inch)
pub const DEFAULT_DPI: f32 = 96.0;

/// Millimetres per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Margin commonly used by page templates (left, right and top)
pub const STANDARD_MARGIN: f32 = 76.0;

// ============================================================================
// Grid & Sizing
// ============================================================================

/// Default grid quantization step
pub const DEFAULT_GRID_UNIT: f32 = 10.0;

/// Smallest width or height a resize gesture may produce
pub const MIN_ELEMENT_SIZE: f32 = 20.0;

/// Width of the band along an element edge that counts as a resize handle
pub const RESIZE_HANDLE_BAND: f32 = 8.0;

// ============================================================================
// Stacking
// ============================================================================

/// Paint order of elements at rest
pub const BASELINE_Z_INDEX: u32 = 1;

/// Paint order of the element under an active gesture
pub const ELEVATED_Z_INDEX: u32 = 100;

// ============================================================================
// Gesture Timing & Feedback
// ============================================================================

/// Window after a spawn commit during which further drops are ignored
pub const DROP_DEBOUNCE_MS: u64 = 100;

/// Ghost tilt while the pointer is outside the page surface
pub const GHOST_INVALID_TILT_DEG: f32 = 10.0;

/// Ghost tilt while the pointer is over the page surface
pub const GHOST_VALID_TILT_DEG: f32 = 0.0;

/// How many fresh ids a spawn commit tries before giving up
pub const MAX_ID_ATTEMPTS: usize = 3;
