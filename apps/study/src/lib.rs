//! Vocabulary study application shell.
//!
//! Wires the pure `vocab-core` logic to its external collaborators: the
//! dataset resource, durable key-value storage, the speech output, and a
//! renderer. The renderer (whatever it is — the reference front end is a
//! browser page, `main.rs` ships a line-oriented stand-in) only reads
//! view-models and emits [`Command`] intents.

pub mod commands;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod progress;
pub mod speech;
pub mod storage;
pub mod theme;

pub use commands::{Command, DispatchOutcome};
pub use controller::{CardView, ChunkSummary, EntryView, StudyController, TitleRange};
pub use dataset::Dataset;
pub use error::{AppError, LoadError, Result, StorageError};
pub use progress::ProgressStore;
pub use speech::{NullSpeech, SpeechPort, SPEECH_LANG};
pub use storage::{default_state_dir, shared, FileStorage, MemoryStorage, SharedStorage, StoragePort};
pub use theme::Theme;
