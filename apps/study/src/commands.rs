//! Command dispatch.
//!
//! The renderer emits intents; the controller consumes them. This keeps the
//! view layer free of direct state access — it only paints view-models and
//! translates user gestures into [`Command`] values.

use crate::controller::StudyController;
use crate::error::Result;
use crate::speech::SpeechPort;
use serde::{Deserialize, Serialize};
use vocab_core::SessionStep;

/// User intents the renderer can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    SetLevel { level: String },
    SetChunk { index: usize },
    ToggleEntry { id: u32 },
    ToggleAllInSet,
    /// Destructive; the renderer must confirm with the user first.
    ResetProgress,
    StartPractice,
    FlipCard,
    NextCard,
    PrevCard,
    CloseSession,
    Speak,
    ToggleTheme,
}

/// What the renderer should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Repaint from the current view-models.
    Done,
    /// The practice queue is exhausted; acknowledge by closing the session.
    SessionComplete,
}

impl StudyController {
    /// Apply one command. Errors follow the propagation policy: load and
    /// empty-selection errors are for the user, the rest are invariant
    /// guards the renderer should only log.
    pub fn dispatch(
        &mut self,
        command: Command,
        speech: &mut dyn SpeechPort,
    ) -> Result<DispatchOutcome> {
        match command {
            Command::SetLevel { level } => self.set_level(&level),
            Command::SetChunk { index } => self.set_chunk(index)?,
            Command::ToggleEntry { id } => {
                self.toggle_entry(id)?;
            }
            Command::ToggleAllInSet => self.toggle_all_in_set()?,
            Command::ResetProgress => self.reset_progress()?,
            Command::StartPractice => self.start_practice()?,
            Command::FlipCard => self.flip_card()?,
            Command::NextCard => {
                if self.next_card()? == SessionStep::Complete {
                    return Ok(DispatchOutcome::SessionComplete);
                }
            }
            Command::PrevCard => self.prev_card()?,
            Command::CloseSession => self.close_session(),
            Command::Speak => self.speak_current(speech)?,
            Command::ToggleTheme => {
                self.toggle_theme()?;
            }
        }
        Ok(DispatchOutcome::Done)
    }
}
