//! Firebird DDL generation for schema blueprints.
//!
//! `oxide-firebird` compiles database-agnostic schema descriptions into DDL
//! for Firebird, whose dialect needs special handling:
//! - Identifiers are limited to 31 characters and are truncated
//! - Auto-increment columns need a generator plus a `BEFORE INSERT` trigger
//!   on engines without identity columns (before 3.0)
//! - Sequences are first-class objects with their own DDL
//! - Existence checks go through the `RDB$` system tables
//!
//! # Architecture
//!
//! - **Schema** - `Column`, `ColumnType` and default values
//! - **Blueprint** - One table operation: columns plus ordered commands
//! - **Sequence** - Standalone sequence objects
//! - **Grammar** - Compiles a blueprint command into exactly one SQL string
//! - **Ddl** - Compiled output: single statements or `EXECUTE BLOCK` scripts
//!
//! The grammar performs no I/O. Its only state is the [`GrammarConfig`]
//! (table prefix and identity mode), so it can be shared across threads.
//!
//! # Example
//!
//! ```rust
//! use oxide_firebird::prelude::*;
//!
//! let grammar = Grammar::new(GrammarConfig::new());
//!
//! let blueprint = Blueprint::new("users")
//!     .create()
//!     .column(Column::increments("id"))
//!     .column(Column::string("email"))
//!     .unique(["email"]);
//!
//! let statements = blueprint.to_sql(&grammar).unwrap();
//! assert_eq!(
//!     statements[0].sql(),
//!     "CREATE TABLE \"users\" (\"id\" INTEGER PRIMARY KEY NOT NULL, \"email\" VARCHAR(255) NOT NULL)"
//! );
//! assert_eq!(statements[1].sql(), "CREATE SEQUENCE \"GEN_users_ID\"");
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Compile a JSON blueprint into an isql script
//! oxide-firebird compile users.json
//!
//! # Use native identity columns (Firebird 3.0+) and a table prefix
//! oxide-firebird --identity native --prefix app_ compile users.json
//!
//! # Print a catalog probe
//! oxide-firebird probe column --table users
//! ```

pub mod blueprint;
pub mod config;
pub mod ddl;
pub mod error;
pub mod grammar;
pub mod schema;
pub mod sequence;

pub use config::GrammarConfig;
pub use error::{GrammarError, Result};
pub use grammar::Grammar;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::blueprint::{Blueprint, Command, ForeignKey, ForeignKeyBuilder, index_name};
    pub use crate::config::{GrammarConfig, IdentityMode};
    pub use crate::ddl::{Ddl, to_isql_script};
    pub use crate::error::{GrammarError, Result};
    pub use crate::grammar::{Grammar, MAX_IDENTIFIER_LENGTH, truncate_identifier};
    pub use crate::schema::{Column, ColumnType, DefaultValue, ForeignKeyAction};
    pub use crate::sequence::{SequenceBlueprint, SequenceCommand};
}
