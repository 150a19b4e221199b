//! Table blueprints and schema commands.
//!
//! A [`Blueprint`] describes one DDL operation against one table: the columns
//! it creates or adds and the structural commands to run. It is built once,
//! compiled once and discarded.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::IdentityMode;
use crate::ddl::Ddl;
use crate::error::Result;
use crate::grammar::Grammar;
use crate::schema::{Column, ForeignKeyAction};

/// Payload of a foreign key command.
///
/// `on` and `references` may be missing in deserialized input; the grammar
/// rejects such commands instead of emitting a dangling `REFERENCES`.
/// Without an explicit `index` the grammar generates the constraint name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Constraint name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Referencing columns.
    pub columns: Vec<String>,
    /// Referenced table.
    #[serde(default)]
    pub on: Option<String>,
    /// Referenced columns.
    #[serde(default)]
    pub references: Vec<String>,
    /// ON DELETE action.
    #[serde(default)]
    pub on_delete: Option<ForeignKeyAction>,
    /// ON UPDATE action.
    #[serde(default)]
    pub on_update: Option<ForeignKeyAction>,
}

/// A single structural command against a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Create the table with all blueprint columns.
    Create,

    /// Drop the table.
    Drop,

    /// Add all blueprint columns to an existing table.
    Add,

    /// Add a primary key.
    Primary {
        /// Key columns.
        columns: Vec<String>,
    },

    /// Add a unique constraint.
    Unique {
        /// Constraint name; generated from the prefixed table when unset.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<String>,
        /// Constrained columns.
        columns: Vec<String>,
    },

    /// Create an index.
    Index {
        /// Index name; generated from the prefixed table when unset.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<String>,
        /// Indexed columns.
        columns: Vec<String>,
    },

    /// Add a foreign key constraint.
    Foreign(ForeignKey),

    /// Drop a foreign key constraint.
    DropForeign {
        /// Constraint name.
        index: String,
    },

    /// Create the generator backing an emulated auto-increment column.
    CreateSequenceForTable,

    /// Drop the emulation generator and trigger, if they exist.
    DropSequenceForTable,

    /// Create the `BEFORE INSERT` trigger filling an emulated
    /// auto-increment column.
    TriggerForAutoincrement {
        /// Column the trigger assigns.
        column: String,
    },
}

impl Command {
    /// Returns the command tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Drop => "drop",
            Self::Add => "add",
            Self::Primary { .. } => "primary",
            Self::Unique { .. } => "unique",
            Self::Index { .. } => "index",
            Self::Foreign(_) => "foreign",
            Self::DropForeign { .. } => "dropForeign",
            Self::CreateSequenceForTable => "createSequenceForTable",
            Self::DropSequenceForTable => "dropSequenceForTable",
            Self::TriggerForAutoincrement { .. } => "triggerForAutoincrement",
        }
    }
}

/// Builder for a foreign key command.
#[derive(Debug, Clone, Default)]
pub struct ForeignKeyBuilder {
    name: Option<String>,
    columns: Vec<String>,
    on: Option<String>,
    references: Vec<String>,
    on_delete: Option<ForeignKeyAction>,
    on_update: Option<ForeignKeyAction>,
}

impl ForeignKeyBuilder {
    /// Creates a foreign key over the given local columns.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: strings(columns),
            ..Self::default()
        }
    }

    /// Sets an explicit constraint name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the referenced columns.
    #[must_use]
    pub fn references<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = strings(columns);
        self
    }

    /// Sets the referenced table.
    #[must_use]
    pub fn on(mut self, table: impl Into<String>) -> Self {
        self.on = Some(table.into());
        self
    }

    /// Sets the ON DELETE action.
    #[must_use]
    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    /// Sets the ON UPDATE action.
    #[must_use]
    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.on_update = Some(action);
        self
    }

    fn build(self) -> Command {
        Command::Foreign(ForeignKey {
            index: self.name,
            columns: self.columns,
            on: self.on,
            references: self.references,
            on_delete: self.on_delete,
            on_update: self.on_update,
        })
    }
}

/// Description of one DDL operation against a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Table name, without prefix.
    pub table: String,
    /// Whether the table is a global temporary table.
    #[serde(default)]
    pub temporary: bool,
    /// Temporary tables only: keep rows on commit.
    #[serde(default)]
    pub preserve: bool,
    /// Identity mode override; the grammar's configured mode applies when unset.
    #[serde(default)]
    pub identity: Option<IdentityMode>,
    /// Columns to create or add.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Commands to run, in order.
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Blueprint {
    /// Creates an empty blueprint for `table`.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            temporary: false,
            preserve: false,
            identity: None,
            columns: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Adds a `create` command.
    #[must_use]
    pub fn create(self) -> Self {
        self.command(Command::Create)
    }

    /// Adds a `drop` command.
    #[must_use]
    pub fn drop(self) -> Self {
        self.command(Command::Drop)
    }

    /// Marks the table as temporary.
    #[must_use]
    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    /// Keeps temporary table rows on commit.
    #[must_use]
    pub fn preserve_rows(mut self) -> Self {
        self.preserve = true;
        self
    }

    /// Overrides the identity mode for this blueprint.
    #[must_use]
    pub fn identity(mut self, mode: IdentityMode) -> Self {
        self.identity = Some(mode);
        self
    }

    /// Adds a column.
    #[must_use]
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds a command.
    #[must_use]
    pub fn command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Adds a primary key over `columns`.
    #[must_use]
    pub fn primary<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = strings(columns);
        self.command(Command::Primary { columns })
    }

    /// Adds a unique constraint with a generated name.
    #[must_use]
    pub fn unique<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command(Command::Unique {
            index: None,
            columns: strings(columns),
        })
    }

    /// Adds an index with a generated name.
    #[must_use]
    pub fn index<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command(Command::Index {
            index: None,
            columns: strings(columns),
        })
    }

    /// Adds a foreign key.
    #[must_use]
    pub fn foreign(self, foreign_key: ForeignKeyBuilder) -> Self {
        self.command(foreign_key.build())
    }

    /// Drops a foreign key by constraint name.
    #[must_use]
    pub fn drop_foreign(self, index: impl Into<String>) -> Self {
        self.command(Command::DropForeign {
            index: index.into(),
        })
    }

    /// Returns true if the blueprint creates its table.
    #[must_use]
    pub fn is_creating(&self) -> bool {
        self.commands.contains(&Command::Create)
    }

    /// Returns the first column eligible for auto-increment.
    #[must_use]
    pub fn serial_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.is_serial())
    }

    /// Returns the commands to compile: the explicit ones plus those implied
    /// by the columns and the identity mode.
    ///
    /// - columns without a `create` command imply `add`;
    /// - emulated identity on `create` with a serial column implies the
    ///   generator and trigger, right after the `create`;
    /// - emulated identity on `drop` implies the guarded generator drop.
    #[must_use]
    pub fn commands_for(&self, mode: IdentityMode) -> Vec<Command> {
        let mut commands = self.commands.clone();

        if !self.columns.is_empty() && !self.is_creating() && !commands.contains(&Command::Add)
        {
            commands.insert(0, Command::Add);
        }

        if mode == IdentityMode::Emulated {
            let has_sequence = commands.contains(&Command::CreateSequenceForTable);
            if let (Some(pos), Some(column), false) = (
                commands.iter().position(|c| *c == Command::Create),
                self.serial_column(),
                has_sequence,
            ) {
                commands.insert(pos + 1, Command::CreateSequenceForTable);
                commands.insert(
                    pos + 2,
                    Command::TriggerForAutoincrement {
                        column: column.name.clone(),
                    },
                );
            }

            let has_drop_sequence = commands.contains(&Command::DropSequenceForTable);
            if let (Some(pos), false) = (
                commands.iter().position(|c| *c == Command::Drop),
                has_drop_sequence,
            ) {
                commands.insert(pos + 1, Command::DropSequenceForTable);
            }
        }

        commands
    }

    /// Compiles every command of this blueprint, implied ones included.
    pub fn to_sql(&self, grammar: &Grammar) -> Result<Vec<Ddl>> {
        let commands = self.commands_for(grammar.identity_mode(self));
        let statements = commands
            .iter()
            .map(|command| grammar.compile(self, command))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            table = %self.table,
            statements = statements.len(),
            "Compiled blueprint"
        );
        Ok(statements)
    }
}

/// Generates a default constraint/index name: `{table}_{columns}_{kind}`,
/// lower-cased, with `-` and `.` replaced by `_`.
///
/// The grammar passes the prefixed table name, since Firebird constraint and
/// index names are global to the database.
#[must_use]
pub fn index_name(table: &str, kind: &str, columns: &[String]) -> String {
    format!("{}_{}_{}", table, columns.join("_"), kind)
        .to_lowercase()
        .replace(['-', '.'], "_")
}

fn strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}
