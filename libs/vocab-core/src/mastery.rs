//! Mastery membership.
//!
//! A [`MasterySet`] is the in-memory set of entry ids the user has marked as
//! known. Persistence lives behind the application's storage port; this type
//! only guarantees O(1) membership and the bulk-toggle semantics.

use crate::types::VocabEntry;
use std::collections::HashSet;

/// Set of mastered entry ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterySet {
    ids: HashSet<u32>,
}

impl MasterySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild membership from a persisted id list. Order is irrelevant;
    /// duplicates collapse.
    pub fn from_ids<I: IntoIterator<Item = u32>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`. Returns the new membership state.
    pub fn toggle(&mut self, id: u32) -> bool {
        if !self.ids.insert(id) {
            self.ids.remove(&id);
            return false;
        }
        true
    }

    /// Bulk toggle over a study set.
    ///
    /// If every entry is already mastered, all of them are unmastered;
    /// otherwise every entry becomes mastered. A partially mastered set
    /// therefore always fills to full on the first call.
    pub fn select_all(&mut self, entries: &[VocabEntry]) {
        let all_mastered = entries.iter().all(|e| self.ids.contains(&e.id));
        for entry in entries {
            if all_mastered {
                self.ids.remove(&entry.id);
            } else {
                self.ids.insert(entry.id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Snapshot of the membership as a sorted id list, suitable for
    /// serialization. Sorting keeps the persisted form deterministic; the
    /// round-trip contract is membership equality, not order equality.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
