//! Error types for the Firebird schema grammar.

use std::path::PathBuf;

/// Errors raised while compiling a blueprint into Firebird DDL.
///
/// Every variant except `Io` and `ParseError` is a caller
/// contract violation: the model handed to the grammar was structurally
/// incomplete, so no SQL is emitted for it.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    /// A foreign key command does not name the table it references.
    #[error("Foreign key '{constraint}' on table '{table}' has no referenced table")]
    MissingReferencedTable {
        /// Table owning the constraint.
        table: String,
        /// Constraint name.
        constraint: String,
    },

    /// A foreign key command does not name the columns it references.
    #[error("Foreign key '{constraint}' on table '{table}' has no referenced columns")]
    MissingReferencedColumns {
        /// Table owning the constraint.
        table: String,
        /// Constraint name.
        constraint: String,
    },

    /// A key, index or foreign key command was given no columns.
    #[error("{command} command on table '{table}' has no columns")]
    EmptyColumns {
        /// Command tag (e.g. "unique", "index").
        command: &'static str,
        /// Table the command applies to.
        table: String,
    },

    /// A constraint or index name is empty.
    #[error("{command} command on table '{table}' has an empty name")]
    EmptyName {
        /// Command tag.
        command: &'static str,
        /// Table the command applies to.
        table: String,
    },

    /// The auto-increment trigger command has no target column.
    #[error("Auto-increment trigger for table '{0}' has no target column")]
    MissingTriggerColumn(String),

    /// An enum column was declared without allowed values.
    #[error("Enum column '{0}' has no allowed values")]
    EmptyEnum(String),

    /// A float default is NaN or infinite, which has no SQL literal.
    #[error("Column '{0}' has a non-finite float default")]
    NonFiniteDefault(String),

    /// A sequence blueprint has an empty name.
    #[error("Sequence name cannot be empty")]
    EmptySequenceName,

    /// IO error (reading config or model files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a model or config file.
    #[error("Failed to parse '{path}': {message}")]
    ParseError {
        /// Path to the file.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

/// Result type for grammar operations.
pub type Result<T> = std::result::Result<T, GrammarError>;
