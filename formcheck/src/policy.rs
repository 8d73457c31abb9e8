//! Validation policy.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationFailure;

/// Default minimum name length, in characters.
pub const DEFAULT_MIN_NAME_CHARS: usize = 3;

/// Policy error type.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to read policy file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse policy: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid policy: {0}")]
    Invalid(String),
}

/// Tunable parts of the rule set.
///
/// Policy files use camelCase keys (`trimName`, `minNameChars`), like every
/// other serialized shape in the crate. Missing keys fall back to the
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormPolicy {
    /// Ignore leading and trailing whitespace when measuring the name.
    pub trim_name: bool,

    /// Minimum name length, in characters.
    pub min_name_chars: usize,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            trim_name: true,
            min_name_chars: DEFAULT_MIN_NAME_CHARS,
        }
    }
}

impl FormPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the name is trimmed before its length is checked.
    pub fn trim_name(mut self, trim: bool) -> Self {
        self.trim_name = trim;
        self
    }

    /// Set the minimum name length.
    pub fn min_name_chars(mut self, min: usize) -> Self {
        self.min_name_chars = min;
        self
    }

    /// Message reported when the name is too short.
    pub fn name_message(&self) -> String {
        if self.min_name_chars == DEFAULT_MIN_NAME_CHARS {
            ValidationFailure::NameTooShort.message().to_string()
        } else {
            format!("Name must be at least {} characters.", self.min_name_chars)
        }
    }

    /// Reject policies that would make the name rule meaningless.
    pub fn check(&self) -> Result<(), PolicyError> {
        if self.min_name_chars == 0 {
            return Err(PolicyError::Invalid(
                "minNameChars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and check a policy from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        let policy: FormPolicy = serde_json::from_str(json)?;
        policy.check()?;
        Ok(policy)
    }

    /// Load a policy from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load a policy from a file if it exists, else use the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
