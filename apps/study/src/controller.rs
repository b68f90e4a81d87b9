//! Selection/view controller.
//!
//! Owns the application state the original kept in module-level globals: the
//! loaded dataset, the persistent progress store, the theme, the level/set
//! cursors, and the optional practice session. The renderer never touches
//! any of that directly; it reads view-models and emits commands (see
//! [`crate::commands`]).

use crate::dataset::Dataset;
use crate::error::{AppError, Result};
use crate::progress::ProgressStore;
use crate::speech::{SpeechPort, SPEECH_LANG};
use crate::storage::SharedStorage;
use crate::theme::Theme;
use serde::Serialize;
use vocab_core::{
    chunks_for_level, filter_by_level, percent_complete, PracticeSession, SessionStep, VocabEntry,
    DEFAULT_SET_SIZE,
};

/// One visible entry, tagged for the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub entry: VocabEntry,
    pub mastered: bool,
}

/// Per-set completion summary for the sets bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkSummary {
    pub index: usize,
    pub percent: u8,
}

/// Absolute 1-based positions of the visible set within its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleRange {
    pub start: usize,
    pub end: usize,
}

/// Current flashcard, ready to paint.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub word: String,
    pub part_of_speech: String,
    pub definition: String,
    pub level: String,
    pub revealed: bool,
    pub position: usize,
    pub total: usize,
}

/// Application state and the operations the renderer drives.
pub struct StudyController {
    dataset: Dataset,
    progress: ProgressStore,
    storage: SharedStorage,
    theme: Theme,
    window: usize,
    active_level: String,
    level_entries: Vec<VocabEntry>,
    active_chunk: usize,
    session: Option<PracticeSession>,
}

impl StudyController {
    /// Build the controller: restore progress and theme, select the first
    /// level (if any) and its first set.
    pub fn new(dataset: Dataset, storage: SharedStorage) -> Result<Self> {
        let progress = ProgressStore::restore(storage.clone())?;
        let theme = Theme::restore(&storage)?;
        let active_level = dataset.levels().first().cloned().unwrap_or_default();
        let level_entries = filter_by_level(dataset.entries(), &active_level);
        Ok(Self {
            dataset,
            progress,
            storage,
            theme,
            window: DEFAULT_SET_SIZE,
            active_level,
            level_entries,
            active_chunk: 0,
            session: None,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn levels(&self) -> &[String] {
        self.dataset.levels()
    }

    pub fn active_level(&self) -> &str {
        &self.active_level
    }

    pub fn active_chunk(&self) -> usize {
        self.active_chunk
    }

    /// Total mastered entries across the whole dataset (the header counter).
    pub fn mastered_count(&self) -> usize {
        self.progress.mastered_count()
    }

    /// Switch levels: recompute the level's entries and reset the set cursor
    /// to the first set.
    pub fn set_level(&mut self, level: &str) {
        self.active_level = level.to_string();
        self.level_entries = filter_by_level(self.dataset.entries(), level);
        self.active_chunk = 0;
        tracing::debug!(level, entries = self.level_entries.len(), "level selected");
    }

    pub fn chunk_count(&self) -> usize {
        chunks_for_level(&self.level_entries, self.window).len()
    }

    /// Move the set cursor. Out-of-range indexes are an internal invariant
    /// violation: logged and rejected, never shown to the user.
    pub fn set_chunk(&mut self, index: usize) -> Result<()> {
        let count = self.chunk_count();
        if index >= count {
            tracing::warn!(index, count, "set index out of range");
            return Err(AppError::OutOfRange { index, count });
        }
        self.active_chunk = index;
        Ok(())
    }

    fn chunk_entries(&self) -> &[VocabEntry] {
        let start = self.active_chunk * self.window;
        let end = (start + self.window).min(self.level_entries.len());
        if start >= end {
            return &[];
        }
        &self.level_entries[start..end]
    }

    /// The visible set's entries, each tagged with its mastered flag.
    pub fn visible_entries(&self) -> Vec<EntryView> {
        self.chunk_entries()
            .iter()
            .map(|entry| EntryView {
                mastered: self.progress.contains(entry.id),
                entry: entry.clone(),
            })
            .collect()
    }

    /// Completion percentage for every set of the active level.
    pub fn chunk_summaries(&self) -> Vec<ChunkSummary> {
        chunks_for_level(&self.level_entries, self.window)
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| ChunkSummary {
                index,
                percent: percent_complete(chunk, self.progress.mastery()),
            })
            .collect()
    }

    /// Absolute positions of the visible set, or `None` when the level has
    /// no entries (the empty state).
    pub fn title_range(&self) -> Option<TitleRange> {
        if self.level_entries.is_empty() {
            return None;
        }
        let start = self.active_chunk * self.window;
        Some(TitleRange {
            start: start + 1,
            end: (start + self.window).min(self.level_entries.len()),
        })
    }

    /// Flip one entry's mastered state and persist.
    pub fn toggle_entry(&mut self, id: u32) -> Result<bool> {
        Ok(self.progress.toggle(id)?)
    }

    /// Bulk toggle the visible set and persist.
    pub fn toggle_all_in_set(&mut self) -> Result<()> {
        let entries = self.chunk_entries().to_vec();
        self.progress.select_all(&entries)?;
        Ok(())
    }

    /// Drop all progress. Destructive; confirmation happens in the renderer.
    pub fn reset_progress(&mut self) -> Result<()> {
        self.progress.clear()?;
        tracing::info!("progress reset");
        Ok(())
    }

    /// Start drilling the currently mastered entries in random order.
    pub fn start_practice(&mut self) -> Result<()> {
        let mastered: Vec<VocabEntry> = self
            .dataset
            .entries()
            .iter()
            .filter(|e| self.progress.contains(e.id))
            .cloned()
            .collect();
        self.session = Some(PracticeSession::start(mastered)?);
        Ok(())
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    fn session_mut(&mut self) -> Result<&mut PracticeSession> {
        self.session.as_mut().ok_or_else(|| {
            tracing::warn!("card command with no active session");
            AppError::NoActiveSession
        })
    }

    fn session_ref(&self) -> Result<&PracticeSession> {
        self.session.as_ref().ok_or(AppError::NoActiveSession)
    }

    /// The current card as a view-model.
    pub fn card_view(&self) -> Result<CardView> {
        let session = self.session_ref()?;
        let entry = session.current();
        let (position, total) = session.position();
        Ok(CardView {
            word: entry.word.clone(),
            part_of_speech: entry.part_of_speech.clone(),
            definition: entry.definition.clone(),
            level: entry.level.clone(),
            revealed: session.is_revealed(),
            position,
            total,
        })
    }

    pub fn flip_card(&mut self) -> Result<()> {
        self.session_mut()?.flip();
        Ok(())
    }

    /// Advance the session. `Complete` is surfaced to the renderer, which
    /// acknowledges by closing the session.
    pub fn next_card(&mut self) -> Result<SessionStep> {
        Ok(self.session_mut()?.advance())
    }

    pub fn prev_card(&mut self) -> Result<()> {
        self.session_mut()?.retreat();
        Ok(())
    }

    pub fn close_session(&mut self) {
        self.session = None;
    }

    /// Send the current card's word to the speech port, cancelling anything
    /// already queued.
    pub fn speak_current(&self, speech: &mut dyn SpeechPort) -> Result<()> {
        let word = self.session_ref()?.current().word.clone();
        speech.cancel();
        speech.speak(&word, SPEECH_LANG);
        Ok(())
    }

    /// Toggle and persist the theme preference.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme = self.theme.toggled();
        self.theme.persist(&self.storage)?;
        Ok(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::test_support::RecordingSpeech;
    use crate::storage::{shared, MemoryStorage};
    use pretty_assertions::assert_eq;
    use vocab_core::RawRecord;

    fn record(word: &str, level: &str) -> RawRecord {
        RawRecord {
            word: Some(word.to_string()),
            cefr: Some(level.to_string()),
            ..Default::default()
        }
    }

    /// 45 B1 entries plus a couple of A1 entries.
    fn controller() -> StudyController {
        let mut records: Vec<RawRecord> =
            (0..45).map(|i| record(&format!("b{i}"), "B1")).collect();
        records.push(record("a0", "A1"));
        records.push(record("a1", "A1"));
        let dataset = Dataset::from_records(&records);
        StudyController::new(dataset, shared(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn defaults_to_first_level_and_first_set() {
        let ctl = controller();
        assert_eq!(ctl.active_level(), "A1");
        assert_eq!(ctl.active_chunk(), 0);
        assert_eq!(ctl.chunk_count(), 1);
        assert_eq!(ctl.visible_entries().len(), 2);
    }

    #[test]
    fn set_level_resets_the_chunk_cursor() {
        let mut ctl = controller();
        ctl.set_level("B1");
        assert_eq!(ctl.chunk_count(), 3);
        ctl.set_chunk(2).unwrap();
        ctl.set_level("A1");
        assert_eq!(ctl.active_chunk(), 0);
    }

    #[test]
    fn title_ranges_use_absolute_positions() {
        let mut ctl = controller();
        ctl.set_level("B1");
        assert_eq!(ctl.title_range(), Some(TitleRange { start: 1, end: 20 }));
        ctl.set_chunk(1).unwrap();
        assert_eq!(ctl.title_range(), Some(TitleRange { start: 21, end: 40 }));
        ctl.set_chunk(2).unwrap();
        assert_eq!(ctl.title_range(), Some(TitleRange { start: 41, end: 45 }));
    }

    #[test]
    fn empty_level_has_no_sets_and_no_title() {
        let mut ctl = controller();
        ctl.set_level("Z9");
        assert_eq!(ctl.chunk_count(), 0);
        assert_eq!(ctl.title_range(), None);
        assert!(ctl.visible_entries().is_empty());
    }

    #[test]
    fn set_chunk_rejects_out_of_range() {
        let mut ctl = controller();
        ctl.set_level("B1");
        let err = ctl.set_chunk(3).unwrap_err();
        assert!(matches!(err, AppError::OutOfRange { index: 3, count: 3 }));
        assert_eq!(ctl.active_chunk(), 0);
    }

    #[test]
    fn toggling_marks_the_visible_entry() {
        let mut ctl = controller();
        let id = ctl.visible_entries()[0].entry.id;
        ctl.toggle_entry(id).unwrap();
        assert!(ctl.visible_entries()[0].mastered);
        assert_eq!(ctl.mastered_count(), 1);
    }

    #[test]
    fn chunk_summaries_track_mastery() {
        let mut ctl = controller();
        ctl.set_level("B1");
        ctl.toggle_all_in_set().unwrap();
        let summaries = ctl.chunk_summaries();
        assert_eq!(
            summaries,
            vec![
                ChunkSummary { index: 0, percent: 100 },
                ChunkSummary { index: 1, percent: 0 },
                ChunkSummary { index: 2, percent: 0 },
            ]
        );
    }

    #[test]
    fn practice_requires_mastered_entries() {
        let mut ctl = controller();
        let err = ctl.start_practice().unwrap_err();
        assert!(matches!(
            err,
            AppError::Session(vocab_core::SessionError::EmptySelection)
        ));
        assert!(!ctl.has_session());
    }

    #[test]
    fn practice_drills_only_mastered_entries() {
        let mut ctl = controller();
        ctl.toggle_all_in_set().unwrap(); // the two A1 entries
        ctl.start_practice().unwrap();

        let mut words = vec![ctl.card_view().unwrap().word];
        while ctl.next_card().unwrap() == SessionStep::Advanced {
            words.push(ctl.card_view().unwrap().word);
        }
        words.sort();
        assert_eq!(words, vec!["a0", "a1"]);

        ctl.close_session();
        assert!(!ctl.has_session());
        assert!(matches!(
            ctl.card_view().unwrap_err(),
            AppError::NoActiveSession
        ));
    }

    #[test]
    fn speak_cancels_then_speaks_the_current_word() {
        let mut ctl = controller();
        ctl.toggle_entry(45).unwrap(); // "a0"
        ctl.start_practice().unwrap();

        let mut speech = RecordingSpeech::default();
        ctl.speak_current(&mut speech).unwrap();
        assert_eq!(speech.cancelled, 1);
        assert_eq!(speech.spoken, vec![("a0".to_string(), "en-GB".to_string())]);
    }

    #[test]
    fn theme_toggle_persists() {
        let storage = shared(MemoryStorage::new());
        let dataset = Dataset::from_records(&[record("alpha", "A1")]);
        let mut ctl = StudyController::new(dataset.clone(), storage.clone()).unwrap();
        assert_eq!(ctl.theme(), Theme::Light);
        assert_eq!(ctl.toggle_theme().unwrap(), Theme::Dark);

        let fresh = StudyController::new(dataset, storage).unwrap();
        assert_eq!(fresh.theme(), Theme::Dark);
    }

    #[test]
    fn reset_progress_clears_everything() {
        let mut ctl = controller();
        ctl.toggle_all_in_set().unwrap();
        assert_eq!(ctl.mastered_count(), 2);
        ctl.reset_progress().unwrap();
        assert_eq!(ctl.mastered_count(), 0);
        assert!(!ctl.visible_entries()[0].mastered);
    }
}
