//! Core types for the vocabulary study tool.

use serde::{Deserialize, Serialize};

/// Number of entries per study set.
pub const DEFAULT_SET_SIZE: usize = 20;

/// Level tag assigned to entries whose source record carries none.
pub const UNCATEGORIZED_LEVEL: &str = "Uncategorized";

/// Placeholder definition for records that lack one.
pub const MISSING_DEFINITION: &str = "...";

/// Raw dataset record as it appears in the JSON resource.
///
/// Every semantic attribute may arrive under either of two key names
/// (`word` / `Word/Phrase`, `cefr` / `CEFR`, `def` / `Definition`); the
/// lowercase name wins when both are present. Unknown keys are ignored and
/// no field is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, rename = "Word/Phrase", skip_serializing_if = "Option::is_none")]
    pub word_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cefr: Option<String>,
    #[serde(default, rename = "CEFR", skip_serializing_if = "Option::is_none")]
    pub cefr_upper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub def: Option<String>,
    #[serde(default, rename = "Definition", skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl RawRecord {
    /// Headword text, preferring the lowercase key. Empty strings count as
    /// absent so a blank `word` falls through to `Word/Phrase`.
    pub fn word_text(&self) -> Option<&str> {
        non_empty(&self.word).or_else(|| non_empty(&self.word_phrase))
    }

    /// Proficiency level, preferring the lowercase key.
    pub fn level_text(&self) -> Option<&str> {
        non_empty(&self.cefr).or_else(|| non_empty(&self.cefr_upper))
    }

    /// Definition text, preferring the lowercase key.
    pub fn definition_text(&self) -> Option<&str> {
        non_empty(&self.def).or_else(|| non_empty(&self.definition))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Normalized vocabulary entry. Immutable once constructed.
///
/// `id` is the record's position in the original input sequence and is the
/// sole identity used for persistence and set membership; dropped records
/// leave gaps rather than renumbering survivors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: u32,
    pub word: String,
    pub part_of_speech: String,
    pub level: String,
    pub definition: String,
}
