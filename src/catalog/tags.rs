//! Active tag store.
//!
//! The catalog reads the active tag set on every filter and suggestion pass;
//! the set may change between calls.

use parking_lot::RwLock;

use super::model::{TagId, TagSet};

/// Source of the currently active tags.
pub trait TagStore: Send + Sync {
    /// Snapshot of the active tag set.
    fn active_tags(&self) -> TagSet;
}

/// In-memory tag store.
#[derive(Debug, Default)]
pub struct InMemoryTagStore {
    active: RwLock<TagSet>,
}

impl InMemoryTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TagId>,
    {
        Self {
            active: RwLock::new(tags.into_iter().map(Into::into).collect()),
        }
    }

    /// Activate a tag. Returns false if it was already active.
    pub fn activate(&self, tag: impl Into<TagId>) -> bool {
        self.active.write().insert(tag.into())
    }

    /// Deactivate a tag. Returns false if it was not active.
    pub fn deactivate(&self, tag: &str) -> bool {
        self.active.write().remove(tag)
    }

    /// Flip a tag; returns whether it is active afterwards.
    pub fn toggle(&self, tag: &str) -> bool {
        let mut active = self.active.write();
        if active.remove(tag) {
            false
        } else {
            active.insert(tag.to_string());
            true
        }
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active.read().contains(tag)
    }

    /// Replace the whole active set.
    pub fn set_active(&self, tags: TagSet) {
        *self.active.write() = tags;
    }

    pub fn clear(&self) {
        self.active.write().clear();
    }
}

impl TagStore for InMemoryTagStore {
    fn active_tags(&self) -> TagSet {
        self.active.read().clone()
    }
}
