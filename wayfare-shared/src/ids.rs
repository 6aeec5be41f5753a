use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Capability for minting unique identifier strings.
///
/// Injected wherever identifiers are created so tests can substitute a
/// deterministic sequence.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Default generator backed by random v4 uuids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests: `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug)]
pub struct SequenceIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequenceIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequenceIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
