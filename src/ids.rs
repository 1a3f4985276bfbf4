//! Element identity generation.
//!
//! Ids are `element-<unix millis>-<9 base36 chars>`. Collisions are
//! vanishingly unlikely but the registry still rejects them, so a spawn
//! commit asks for a fresh id and retries.

use crate::types::ElementId;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Source of element ids.
pub trait IdSource: Send {
    fn next_id(&mut self) -> ElementId;
}

/// Timestamp plus random suffix.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> ElementId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        ElementId::new(format!("element-{millis}-{suffix}"))
    }
}

/// Deterministic ids (`element-1`, `element-2`, ...), for tests and replays.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("element")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ElementId {
        let id = ElementId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
