//! Core vocabulary study library shared by the application shell.
//!
//! Provides:
//! - Record normalization (heterogeneous JSON records -> `VocabEntry`)
//! - Level listing and fixed-size set partitioning
//! - Mastery membership with bulk-toggle semantics
//! - Randomized flashcard session state machine

pub mod error;
pub mod mastery;
pub mod normalize;
pub mod partition;
pub mod session;
pub mod types;

pub use error::{Result, SessionError};
pub use mastery::MasterySet;
pub use normalize::normalize;
pub use partition::{chunks_for_level, filter_by_level, list_levels, percent_complete};
pub use session::{PracticeSession, SessionStep};
pub use types::{RawRecord, VocabEntry, DEFAULT_SET_SIZE, MISSING_DEFINITION, UNCATEGORIZED_LEVEL};
