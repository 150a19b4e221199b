//! Firebird schema grammar.
//!
//! The grammar turns a [`Blueprint`] and one of its [`Command`]s into exactly
//! one piece of SQL text. It performs no I/O and keeps no state between
//! calls: the output is a function of the blueprint, the command and the
//! [`GrammarConfig`].
//!
//! Submodules add the pieces:
//!
//! - `identifier` - quoting and 31-character truncation
//! - `types` - column type rendering
//! - `modifiers` - the ordered column modifier pipeline
//! - `commands` - table commands (create, add, keys, indexes)
//! - `sequences` - auto-increment emulation and standalone sequences
//! - `catalog` - existence probes against the system tables

mod catalog;
mod commands;
mod identifier;
mod modifiers;
mod sequences;
mod types;

pub use identifier::{MAX_IDENTIFIER_LENGTH, truncate_identifier};
pub use modifiers::{MODIFIERS, Modifier};

use tracing::debug;

use crate::blueprint::{Blueprint, Command};
use crate::config::{GrammarConfig, IdentityMode};
use crate::ddl::Ddl;
use crate::error::Result;
use crate::sequence::{SequenceBlueprint, SequenceCommand};

/// Compiles blueprints into Firebird DDL.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    config: GrammarConfig,
}

impl Grammar {
    /// Creates a grammar with the given configuration.
    #[must_use]
    pub fn new(config: GrammarConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Returns the table prefix.
    #[must_use]
    pub fn table_prefix(&self) -> &str {
        &self.config.table_prefix
    }

    /// Returns the identity mode in effect for `blueprint`.
    #[must_use]
    pub fn identity_mode(&self, blueprint: &Blueprint) -> IdentityMode {
        blueprint.identity.unwrap_or(self.config.identity)
    }

    /// Compiles one command of `blueprint`.
    pub fn compile(&self, blueprint: &Blueprint, command: &Command) -> Result<Ddl> {
        let ddl = match command {
            Command::Create => Ddl::Statement(self.compile_create(blueprint)?),
            Command::Drop => Ddl::Statement(self.compile_drop(blueprint)),
            Command::Add => Ddl::Statement(self.compile_add(blueprint)?),
            Command::Primary { columns } => {
                Ddl::Statement(self.compile_primary(blueprint, columns)?)
            }
            Command::Unique { index, columns } => {
                Ddl::Statement(self.compile_unique(blueprint, index.as_deref(), columns)?)
            }
            Command::Index { index, columns } => {
                Ddl::Statement(self.compile_index(blueprint, index.as_deref(), columns)?)
            }
            Command::Foreign(foreign) => {
                Ddl::Statement(self.compile_foreign(blueprint, foreign)?)
            }
            Command::DropForeign { index } => {
                Ddl::Statement(self.compile_drop_foreign(blueprint, index)?)
            }
            Command::CreateSequenceForTable => {
                Ddl::Statement(self.compile_sequence_for_table(blueprint))
            }
            Command::DropSequenceForTable => {
                Ddl::Script(self.compile_drop_sequence_for_table(blueprint))
            }
            Command::TriggerForAutoincrement { column } => {
                Ddl::Statement(self.compile_trigger_for_autoincrement(blueprint, column)?)
            }
        };

        debug!(
            table = %blueprint.table,
            command = command.name(),
            sql = %ddl,
            "Compiled command"
        );
        Ok(ddl)
    }

    /// Compiles one command of a standalone sequence blueprint.
    pub fn compile_sequence(
        &self,
        sequence: &SequenceBlueprint,
        command: SequenceCommand,
    ) -> Result<Ddl> {
        let ddl = match command {
            SequenceCommand::Create => Ddl::Statement(self.compile_create_sequence(sequence)?),
            SequenceCommand::Alter => Ddl::Statement(self.compile_alter_sequence(sequence)?),
            SequenceCommand::Drop => Ddl::Statement(self.compile_drop_sequence(sequence)?),
            SequenceCommand::DropIfExists => {
                Ddl::Script(self.compile_drop_sequence_if_exists(sequence)?)
            }
        };

        debug!(
            sequence = %sequence.sequence,
            command = ?command,
            sql = %ddl,
            "Compiled sequence command"
        );
        Ok(ddl)
    }
}
