use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of record identifiers injected at construction time
pub trait IdGenerator {
    /// Produce a new, non-empty identifier
    fn generate(&self) -> String;
}

/// Random UUID-v4 identifiers in canonical hyphenated lowercase form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic identifiers (`<prefix>-0`, `<prefix>-1`, ...) for tests and
/// reproducible fixtures
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator producing ids with the given prefix, starting at 0
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String,
{
    fn generate(&self) -> String {
        self()
    }
}

/// Keep an explicit non-empty id, otherwise ask the generator for one
pub(crate) fn resolve_id(id: Option<String>, ids: &dyn IdGenerator) -> String {
    match id {
        Some(id) if !id.is_empty() => id,
        _ => {
            let id = ids.generate();
            log::debug!("Assigned generated id {}", id);
            id
        }
    }
}
