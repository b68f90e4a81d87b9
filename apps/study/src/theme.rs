//! Color theme preference.

use crate::error::StorageError;
use crate::storage::{SharedStorage, StoragePort, THEME_KEY};
use serde::{Deserialize, Serialize};

/// Color theme. Absence of a stored token, or any unknown token, means
/// light — only `"dark"` is meaningful, so future schema changes degrade
/// gracefully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Token persisted under the theme key.
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Load the saved preference, defaulting to light.
    pub fn restore(storage: &SharedStorage) -> Result<Self, StorageError> {
        let token = storage.lock().expect("storage lock").get(THEME_KEY)?;
        Ok(Self::from_token(token.as_deref()))
    }

    /// Save the preference.
    pub fn persist(self, storage: &SharedStorage) -> Result<(), StorageError> {
        storage
            .lock()
            .expect("storage lock")
            .set(THEME_KEY, self.token())
    }
}
