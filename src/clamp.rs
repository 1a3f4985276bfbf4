//! Boundary clamping.
//!
//! Keeps committed rectangles inside the page's usable area. Clamping
//! always runs after snapping: snapping a clamped value can push it back
//! past a page edge, clamping a snapped value cannot.

use crate::snap::GridSnapper;
use crate::types::{PageSurface, ResizeEdges};
use serde::{Deserialize, Serialize};

/// Restrict a `width x height` rectangle's top-left corner to the page's
/// clamping region. Size is never changed.
///
/// If the rectangle is wider (or taller) than the region, the min bound
/// wins and the rectangle sticks to the left (or top) margin.
#[inline]
pub fn clamp(x: f32, y: f32, width: f32, height: f32, surface: &PageSurface) -> (f32, f32) {
    (
        surface.min_x().max(x.min(surface.max_x(width))),
        surface.min_y().max(y.min(surface.max_y(height))),
    )
}

/// Snap then clamp: the canonical placement pipeline for spawn and move.
#[inline]
pub fn place(
    snapper: &GridSnapper,
    raw: (f32, f32),
    size: (f32, f32),
    surface: &PageSurface,
) -> (f32, f32) {
    let (x, y) = snapper.snap_point(raw);
    clamp(x, y, size.0, size.1, surface)
}

/// Which region a resize gesture may extend into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeBoundary {
    /// The page minus its left, right and top margins
    #[default]
    MarginInset,
    /// The whole page, margins included
    FullPage,
}

/// Edge limits `(left, top, right, bottom)` for a resize under `policy`.
pub fn resize_limits(surface: &PageSurface, policy: ResizeBoundary) -> (f32, f32, f32, f32) {
    match policy {
        ResizeBoundary::MarginInset => (
            surface.margins.left,
            surface.margins.top,
            surface.width - surface.margins.right,
            surface.height,
        ),
        ResizeBoundary::FullPage => (0.0, 0.0, surface.width, surface.height),
    }
}

/// Inputs of one resize frame.
#[derive(Clone, Copy, Debug)]
pub struct ResizeRequest {
    pub start_position: (f32, f32),
    pub start_size: (f32, f32),
    pub edges: ResizeEdges,
    /// Cumulative pointer delta since the gesture started
    pub delta: (f32, f32),
    pub min_size: f32,
}

/// Compute the rectangle for a resize frame.
///
/// Dragged edges move by the pointer delta (optionally snapped) and stop
/// at the policy limits; the opposite edges stay anchored. Neither side
/// shrinks below `min_size`. When growing to `min_size` would cross a
/// limit, the whole span slides back inside it. Returns `(position, size)`.
pub fn resize_rect(
    request: &ResizeRequest,
    snapper: Option<&GridSnapper>,
    surface: &PageSurface,
    policy: ResizeBoundary,
) -> ((f32, f32), (f32, f32)) {
    let snap = |v: f32| snapper.map_or(v, |s| s.snap(v));
    let (min_left, min_top, max_right, max_bottom) = resize_limits(surface, policy);
    let (x0, y0) = request.start_position;
    let (w0, h0) = request.start_size;
    let (dx, dy) = request.delta;
    let min = request.min_size;

    let mut left = x0;
    let mut right = x0 + w0;
    let mut top = y0;
    let mut bottom = y0 + h0;

    if request.edges.left {
        left = snap(x0 + dx).max(min_left).min(right - min);
    }
    if request.edges.right {
        right = snap(x0 + w0 + dx).min(max_right).max(left + min);
    }
    if request.edges.top {
        top = snap(y0 + dy).max(min_top).min(bottom - min);
    }
    if request.edges.bottom {
        bottom = snap(y0 + h0 + dy).min(max_bottom).max(top + min);
    }

    // an element that already sat past a limit may stay there
    let (left, right) = fit_span(left, right, min_left.min(x0), max_right.max(x0 + w0));
    let (top, bottom) = fit_span(top, bottom, min_top.min(y0), max_bottom.max(y0 + h0));

    ((left, top), (right - left, bottom - top))
}

/// Slide `[lo, hi]` back inside `[lo_limit, hi_limit]`, keeping its length
/// where the limits allow it.
fn fit_span(lo: f32, hi: f32, lo_limit: f32, hi_limit: f32) -> (f32, f32) {
    if hi > hi_limit {
        ((lo - (hi - hi_limit)).max(lo_limit), hi_limit)
    } else if lo < lo_limit {
        (lo_limit, (hi + (lo_limit - lo)).min(hi_limit))
    } else {
        (lo, hi)
    }
}
