//! Flashcard practice session.
//!
//! A session is an ephemeral randomized queue over the entries handed to it
//! (the currently mastered words) with a linear cursor. The session exists
//! only while active; the caller drops it on close or once a
//! [`SessionStep::Complete`] has been acknowledged.

use crate::error::{Result, SessionError};
use crate::types::VocabEntry;
use rand::seq::SliceRandom;
use rand::Rng;

/// Outcome of moving the cursor forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// Cursor moved to the next card.
    Advanced,
    /// Queue exhausted; the cursor stays on the last card. Terminal.
    Complete,
}

/// Active flashcard session: shuffled queue, cursor, and the
/// presentation-only "revealed" flag.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    queue: Vec<VocabEntry>,
    cursor: usize,
    revealed: bool,
}

impl PracticeSession {
    /// Start a session over the given entries in uniformly random order.
    ///
    /// Fails with [`SessionError::EmptySelection`] when there is nothing to
    /// practice.
    pub fn start(entries: Vec<VocabEntry>) -> Result<Self> {
        Self::start_with_rng(entries, &mut rand::rng())
    }

    /// As [`start`](Self::start), with a caller-supplied rng for
    /// deterministic tests. Fisher-Yates: every entry appears exactly once.
    pub fn start_with_rng<R: Rng + ?Sized>(mut entries: Vec<VocabEntry>, rng: &mut R) -> Result<Self> {
        if entries.is_empty() {
            return Err(SessionError::EmptySelection);
        }
        entries.shuffle(rng);
        Ok(Self {
            queue: entries,
            cursor: 0,
            revealed: false,
        })
    }

    /// Card under the cursor. Always valid: the queue is non-empty and the
    /// cursor never moves past the end.
    pub fn current(&self) -> &VocabEntry {
        &self.queue[self.cursor]
    }

    /// Move to the next card, or signal completion when the queue is
    /// exhausted.
    pub fn advance(&mut self) -> SessionStep {
        if self.cursor + 1 < self.queue.len() {
            self.cursor += 1;
            self.revealed = false;
            SessionStep::Advanced
        } else {
            SessionStep::Complete
        }
    }

    /// Move back one card. No-op at the first card.
    pub fn retreat(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.revealed = false;
        }
    }

    /// Toggle the revealed face of the current card. Presentation state
    /// only; cleared whenever the cursor moves.
    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// (1-based position, queue length) for the "i of N" display.
    pub fn position(&self) -> (usize, usize) {
        (self.cursor + 1, self.queue.len())
    }
}
