//! Dataset loading.
//!
//! The browser build fetches a static JSON resource once at startup; here
//! that boundary is a synchronous file read. Any failure is a [`LoadError`],
//! fatal to the whole session with no retry.

use crate::error::LoadError;
use std::fs;
use std::path::Path;
use vocab_core::{list_levels, normalize, RawRecord, VocabEntry};

/// Normalized dataset plus its derived level list. The level list is
/// computed once per load; its lifecycle is tied to the dataset's.
#[derive(Debug, Clone)]
pub struct Dataset {
    entries: Vec<VocabEntry>,
    levels: Vec<String>,
}

impl Dataset {
    /// Read and parse the JSON resource at `path`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse raw JSON content (an array of records).
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let records: Vec<RawRecord> = serde_json::from_str(content)?;
        Ok(Self::from_records(&records))
    }

    /// Build from already-deserialized records.
    pub fn from_records(records: &[RawRecord]) -> Self {
        let entries = normalize(records);
        let levels = list_levels(&entries);
        tracing::info!(
            entries = entries.len(),
            levels = levels.len(),
            "dataset loaded"
        );
        Self { entries, levels }
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// Sorted distinct level tags.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
