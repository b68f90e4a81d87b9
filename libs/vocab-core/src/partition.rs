//! Level and set partitioning.
//!
//! Derived views over the normalized dataset: the sorted list of proficiency
//! levels, the entries belonging to one level, and that level's fixed-size
//! study sets ("chunks"). Nothing here holds state; everything is recomputed
//! from the entry list on demand.

use crate::mastery::MasterySet;
use crate::types::VocabEntry;

/// Distinct level tags across all entries, lexicographically sorted.
pub fn list_levels(entries: &[VocabEntry]) -> Vec<String> {
    let mut levels: Vec<String> = entries.iter().map(|e| e.level.clone()).collect();
    levels.sort();
    levels.dedup();
    levels
}

/// Entries whose level matches exactly (case-sensitive), in original order.
pub fn filter_by_level(entries: &[VocabEntry], level: &str) -> Vec<VocabEntry> {
    entries
        .iter()
        .filter(|e| e.level == level)
        .cloned()
        .collect()
}

/// Slice a level's entries into contiguous windows of `window` entries.
///
/// The last chunk may be shorter; zero entries yield zero chunks. `window`
/// must be non-zero.
pub fn chunks_for_level(level_entries: &[VocabEntry], window: usize) -> Vec<&[VocabEntry]> {
    debug_assert!(window > 0, "chunk window must be non-zero");
    if level_entries.is_empty() {
        return Vec::new();
    }
    level_entries.chunks(window).collect()
}

/// Completion percentage of one chunk against the mastery set, rounded to
/// the nearest integer in 0..=100.
///
/// Sharp edge: a chunk with zero entries has no defined percentage and must
/// not be evaluated. The caller guards this (zero entries means zero chunks
/// upstream); if it happens anyway we return 0 rather than divide by zero.
pub fn percent_complete(chunk: &[VocabEntry], mastery: &MasterySet) -> u8 {
    debug_assert!(!chunk.is_empty(), "percent_complete on an empty chunk");
    if chunk.is_empty() {
        return 0;
    }
    let mastered = chunk.iter().filter(|e| mastery.contains(e.id)).count();
    (100.0 * mastered as f64 / chunk.len() as f64).round() as u8
}
