//! Boundary to the block content editor.
//!
//! The engine never looks inside a block. It asks the host for a mount
//! point when an element is committed and hands the mount back when the
//! element is removed; the handle itself is stored on the element in the
//! registry, so no ambient id-to-node map exists anywhere else.

use crate::types::ElementId;
use serde::{Deserialize, Serialize};

/// Opaque reference to content owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MountHandle(pub u64);

/// The external collaborator that owns block content.
pub trait ContentHost: Send {
    /// Create content for a freshly committed element. `None` means the
    /// host has nothing to mount; the element is still placed.
    fn mount(&mut self, id: &ElementId) -> Option<MountHandle>;

    /// Detach and drop the content previously mounted for `id`.
    fn release(&mut self, id: &ElementId, handle: MountHandle);
}

/// Host used when no editor is attached. Mounts nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedContent;

impl ContentHost for DetachedContent {
    fn mount(&mut self, _id: &ElementId) -> Option<MountHandle> {
        None
    }

    fn release(&mut self, _id: &ElementId, _handle: MountHandle) {}
}
