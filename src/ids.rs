use std::sync::atomic::{AtomicU64, Ordering};
use ulid::Ulid;

/// Source of fresh identifiers for newly created records.
pub trait IdGenerator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

/// Time-ordered identifiers for running services.
#[derive(Debug, Default, Clone, Copy)]
pub struct UlidGenerator;

impl IdGenerator for UlidGenerator {
    fn generate(&self) -> String {
        Ulid::new().to_string()
    }
}

/// Predictable identifiers: `prefix-1`, `prefix-2`, and so on.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up_from_one() {
        let ids = SequentialIds::new("book");
        assert_eq!(ids.generate(), "book-1");
        assert_eq!(ids.generate(), "book-2");
    }

    #[test]
    fn ulids_are_distinct() {
        let ids = UlidGenerator;
        let a = ids.generate();
        let b = ids.generate();
        assert_eq!(a.len(), 26);
        assert_ne!(a, b);
    }
}
