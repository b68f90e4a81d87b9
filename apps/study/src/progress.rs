//! Persistent mastery progress.
//!
//! Wraps the pure [`MasterySet`] with the storage port: every mutating
//! operation persists before returning, so state survives a reload and no
//! partial-failure window is visible to any other operation.

use crate::error::StorageError;
use crate::storage::{SharedStorage, StoragePort, PROGRESS_KEY};
use vocab_core::{MasterySet, VocabEntry};

/// Mastery set mirrored to durable storage.
pub struct ProgressStore {
    mastery: MasterySet,
    storage: SharedStorage,
}

impl ProgressStore {
    /// Load membership from storage. A missing key starts empty; a malformed
    /// payload is treated as empty and logged, never propagated — losing
    /// progress silently beats refusing to load the dataset.
    pub fn restore(storage: SharedStorage) -> Result<Self, StorageError> {
        let stored = storage.lock().expect("storage lock").get(PROGRESS_KEY)?;
        let mastery = match stored {
            None => MasterySet::new(),
            Some(raw) => match serde_json::from_str::<Vec<u32>>(&raw) {
                Ok(ids) => MasterySet::from_ids(ids),
                Err(err) => {
                    tracing::warn!(%err, "stored progress unparsable, starting empty");
                    MasterySet::new()
                }
            },
        };
        Ok(Self { mastery, storage })
    }

    pub fn contains(&self, id: u32) -> bool {
        self.mastery.contains(id)
    }

    pub fn mastered_count(&self) -> usize {
        self.mastery.len()
    }

    pub fn mastery(&self) -> &MasterySet {
        &self.mastery
    }

    /// Flip one entry's mastered state. Returns the new state.
    pub fn toggle(&mut self, id: u32) -> Result<bool, StorageError> {
        let mastered = self.mastery.toggle(id);
        self.persist()?;
        Ok(mastered)
    }

    /// Bulk toggle a study set (all mastered ⇒ unmaster all, else fill).
    pub fn select_all(&mut self, entries: &[VocabEntry]) -> Result<(), StorageError> {
        self.mastery.select_all(entries);
        self.persist()
    }

    /// Drop all progress and persist the empty state. Destructive; the
    /// renderer is responsible for user confirmation.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.mastery.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.mastery.ids())?;
        self.storage
            .lock()
            .expect("storage lock")
            .set(PROGRESS_KEY, &payload)
    }
}
