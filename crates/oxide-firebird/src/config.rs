//! Process-wide grammar configuration.
//!
//! The grammar holds no state besides this value: a table-name prefix and the
//! identity mode. Both are set once and read by every compile call.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GrammarError, Result};

/// How auto-increment columns are realised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    /// Plain `PRIMARY KEY` plus a generator and a `BEFORE INSERT` trigger.
    /// Required for engines older than Firebird 3.0.
    #[default]
    Emulated,
    /// `GENERATED BY DEFAULT AS IDENTITY` (Firebird 3.0+).
    Native,
}

impl IdentityMode {
    /// Returns true if native identity columns are used.
    #[must_use]
    pub fn is_native(self) -> bool {
        matches!(self, Self::Native)
    }
}

impl std::str::FromStr for IdentityMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emulated" | "sequence" | "trigger" => Ok(Self::Emulated),
            "native" | "identity" => Ok(Self::Native),
            other => Err(format!(
                "unknown identity mode '{other}' (expected 'emulated' or 'native')"
            )),
        }
    }
}

/// Configuration shared by every compile call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Prefix prepended to table and sequence names.
    pub table_prefix: String,
    /// Identity mode used when a blueprint does not override it.
    pub identity: IdentityMode,
}

impl GrammarConfig {
    /// Creates a configuration with no prefix and emulated identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table prefix.
    #[must_use]
    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    /// Sets the identity mode.
    #[must_use]
    pub fn identity(mut self, mode: IdentityMode) -> Self {
        self.identity = mode;
        self
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| GrammarError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
