//! The component-name registry.

use indexmap::IndexSet;

/// Tracks which base names have already been claimed by a component.
///
/// The registry is the only mutable state of an aggregation run. It is
/// created empty per run and threaded by `&mut` through identifier
/// resolution, never held globally; the first component to claim a base
/// name keeps it unprefixed, every later claimant is pushed into the
/// component namespace.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    used: IndexSet<String>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Has an earlier-processed component claimed `base`?
    pub fn is_used(&self, base: &str) -> bool {
        self.used.contains(base)
    }

    /// Claim `base` for a component.
    pub fn mark_used(&mut self, base: impl Into<String>) {
        self.used.insert(base.into());
    }

    /// Claimed base names, in claim order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
