//! Grid snapping.
//!
//! Quantizes coordinates to the nearest grid line. Halves round toward
//! positive infinity, so `-5` snaps to `0` and `5` snaps to `10` on a
//! 10-unit grid.

use crate::constants::DEFAULT_GRID_UNIT;

/// Rounds coordinates to the nearest multiple of a fixed grid unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnapper {
    unit: f32,
}

impl GridSnapper {
    /// A non-positive or non-finite unit disables snapping.
    pub fn new(unit: f32) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> f32 {
        self.unit
    }

    fn is_active(&self) -> bool {
        self.unit.is_finite() && self.unit > 0.0
    }

    #[inline]
    pub fn snap(&self, value: f32) -> f32 {
        if !self.is_active() {
            return value;
        }
        (value / self.unit + 0.5).floor() * self.unit
    }

    /// Snap each axis independently.
    #[inline]
    pub fn snap_point(&self, point: (f32, f32)) -> (f32, f32) {
        (self.snap(point.0), self.snap(point.1))
    }
}

impl Default for GridSnapper {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_UNIT)
    }
}
