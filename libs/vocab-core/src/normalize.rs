//! Record normalization.
//!
//! Turns raw heterogeneous dataset records into the canonical [`VocabEntry`]
//! shape: positional ids, parenthetical part-of-speech annotations split out
//! of the headword, defaults for missing level and definition.

use crate::types::{RawRecord, VocabEntry, MISSING_DEFINITION, UNCATEGORIZED_LEVEL};

/// Normalize a sequence of raw records into vocabulary entries.
///
/// Ids are assigned by position in the *input* sequence. Records whose
/// headword is empty after stripping are dropped, leaving gaps in the id
/// space; survivors are never renumbered, so persisted mastery ids stay
/// stable across loads of the same dataset.
pub fn normalize(records: &[RawRecord]) -> Vec<VocabEntry> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let raw = record.word_text().unwrap_or("");
            let (word, part_of_speech) = split_parenthetical(raw);
            if word.is_empty() {
                return None;
            }
            Some(VocabEntry {
                id: i as u32,
                word,
                part_of_speech,
                level: record
                    .level_text()
                    .unwrap_or(UNCATEGORIZED_LEVEL)
                    .to_string(),
                definition: record
                    .definition_text()
                    .unwrap_or(MISSING_DEFINITION)
                    .to_string(),
            })
        })
        .collect()
}

/// Split a raw headword into (word, part_of_speech).
///
/// The part of speech is the contents of the first parenthetical group.
/// The stripped word removes everything from the first `(` through the last
/// `)` and trims surrounding whitespace. Text with an unclosed `(` is left
/// untouched.
fn split_parenthetical(raw: &str) -> (String, String) {
    let Some(open) = raw.find('(') else {
        return (raw.trim().to_string(), String::new());
    };
    let Some(close) = raw[open + 1..].find(')') else {
        return (raw.trim().to_string(), String::new());
    };
    let first_close = open + 1 + close;
    let part_of_speech = raw[open + 1..first_close].to_string();

    // Strip spans from the first open paren through the last close paren,
    // which is at least `first_close`.
    let last_close = raw.rfind(')').unwrap_or(first_close);
    let mut word = String::with_capacity(raw.len());
    word.push_str(&raw[..open]);
    word.push_str(&raw[last_close + 1..]);

    (word.trim().to_string(), part_of_speech)
}
