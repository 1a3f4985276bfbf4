//! Error types for engine operations
//!
//! None of these cross the pointer-event boundary: the drag controller
//! absorbs and logs them so a failed interaction degrades to a no-op.

use crate::types::ElementId;
use thiserror::Error;

/// Errors that can occur while mutating canvas state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// An element with this id is already registered
    #[error("duplicate element id: {0}")]
    DuplicateId(ElementId),

    /// The referenced element is not (or no longer) registered
    #[error("unknown element: {0}")]
    UnknownElement(ElementId),

    /// A width or height that cannot be placed on the page
    #[error("invalid geometry: {width}x{height}")]
    InvalidGeometry { width: f32, height: f32 },
}

impl EngineError {
    /// Races between UI events and removal produce these; they are not fatal.
    pub fn is_benign(&self) -> bool {
        matches!(self, EngineError::UnknownElement(_))
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Reject sizes that cannot reach the clamper.
pub fn validate_size(width: f32, height: f32) -> EngineResult<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidGeometry { width, height })
    }
}
