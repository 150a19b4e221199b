//! Standalone sequence blueprints.
//!
//! Explicit sequences are created by schema authors directly and are not tied
//! to a table. They share the generator mechanism with auto-increment
//! emulation but not its naming.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ddl::Ddl;
use crate::error::Result;
use crate::grammar::Grammar;

fn default_increment() -> i64 {
    1
}

/// A command against a standalone sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SequenceCommand {
    /// `CREATE SEQUENCE`.
    Create,
    /// `ALTER SEQUENCE`.
    Alter,
    /// `DROP SEQUENCE`.
    Drop,
    /// Guarded `DROP SEQUENCE` that does nothing if the sequence is missing.
    DropIfExists,
}

/// Description of a standalone sequence and the commands to run on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceBlueprint {
    /// Sequence name, without prefix.
    pub sequence: String,
    /// Start (or restart) value.
    #[serde(default)]
    pub start: Option<i64>,
    /// Increment step.
    #[serde(default = "default_increment")]
    pub increment: i64,
    /// Alter only: restart the sequence.
    #[serde(default)]
    pub restart: bool,
    /// Commands to run, in order.
    #[serde(default)]
    pub commands: Vec<SequenceCommand>,
}

impl SequenceBlueprint {
    /// Creates a blueprint for `sequence` with increment 1.
    #[must_use]
    pub fn new(sequence: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            start: None,
            increment: 1,
            restart: false,
            commands: Vec::new(),
        }
    }

    /// Sets the start value.
    #[must_use]
    pub fn start_with(mut self, value: i64) -> Self {
        self.start = Some(value);
        self
    }

    /// Sets the increment.
    #[must_use]
    pub fn increment_by(mut self, value: i64) -> Self {
        self.increment = value;
        self
    }

    /// Restarts the sequence on alter.
    #[must_use]
    pub fn restart(mut self) -> Self {
        self.restart = true;
        self
    }

    /// Adds a command.
    #[must_use]
    pub fn command(mut self, command: SequenceCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Adds a `create` command.
    #[must_use]
    pub fn create(self) -> Self {
        self.command(SequenceCommand::Create)
    }

    /// Adds an `alter` command.
    #[must_use]
    pub fn alter(self) -> Self {
        self.command(SequenceCommand::Alter)
    }

    /// Adds a `drop` command.
    #[must_use]
    pub fn drop(self) -> Self {
        self.command(SequenceCommand::Drop)
    }

    /// Adds a guarded drop command.
    #[must_use]
    pub fn drop_if_exists(self) -> Self {
        self.command(SequenceCommand::DropIfExists)
    }

    /// Compiles every command of this blueprint.
    pub fn to_sql(&self, grammar: &Grammar) -> Result<Vec<Ddl>> {
        let statements = self
            .commands
            .iter()
            .map(|command| grammar.compile_sequence(self, *command))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            sequence = %self.sequence,
            statements = statements.len(),
            "Compiled sequence blueprint"
        );
        Ok(statements)
    }
}

impl AsRef<str> for SequenceBlueprint {
    fn as_ref(&self) -> &str {
        &self.sequence
    }
}
