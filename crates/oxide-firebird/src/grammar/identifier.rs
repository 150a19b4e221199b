//! Identifier quoting and truncation.
//!
//! Firebird (before 4.0) rejects identifiers longer than 31 characters.
//! Names are cut to their first 31 characters before quoting. The cut is a
//! plain prefix, so the same input always yields the same identifier and an
//! object created under a truncated name can be dropped with the same name.
//! Two names sharing their first 31 characters collide; that is not checked.

use tracing::debug;

use super::Grammar;
use crate::blueprint::index_name;

/// Maximum identifier length in characters.
pub const MAX_IDENTIFIER_LENGTH: usize = 31;

/// Returns the first [`MAX_IDENTIFIER_LENGTH`] characters of `name`.
#[must_use]
pub fn truncate_identifier(name: &str) -> &str {
    match name.char_indices().nth(MAX_IDENTIFIER_LENGTH) {
        Some((end, _)) => {
            let truncated = &name[..end];
            debug!(original = name, truncated, "Truncated identifier");
            truncated
        }
        None => name,
    }
}

impl Grammar {
    /// Quotes a name, truncating each dotted segment to 31 characters.
    ///
    /// `*` is left unquoted and embedded double quotes are doubled.
    #[must_use]
    pub fn wrap(&self, value: &str) -> String {
        value
            .split('.')
            .map(|segment| self.wrap_segment(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Quotes a table name after prepending the table prefix.
    #[must_use]
    pub fn wrap_table(&self, table: &str) -> String {
        self.wrap(&self.prefixed(table))
    }

    /// Quotes a sequence name after prepending the table prefix.
    ///
    /// Accepts a raw name or a [`SequenceBlueprint`](crate::sequence::SequenceBlueprint).
    #[must_use]
    pub fn wrap_sequence(&self, sequence: impl AsRef<str>) -> String {
        self.wrap(&self.prefixed(sequence.as_ref()))
    }

    /// Quotes and comma-joins column names.
    #[must_use]
    pub fn columnize(&self, columns: &[String]) -> String {
        columns
            .iter()
            .map(|c| self.wrap(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the prefixed, truncated, unquoted name of `table` as stored
    /// in the system catalog.
    #[must_use]
    pub fn table_name(&self, table: &str) -> String {
        truncate_identifier(&self.prefixed(table)).to_string()
    }

    /// Default name of a `kind` constraint or index over `columns`, built from
    /// the prefixed table name. Unquoted and not yet truncated.
    #[must_use]
    pub fn index_name(&self, table: &str, kind: &str, columns: &[String]) -> String {
        index_name(&self.prefixed(table), kind, columns)
    }

    fn prefixed(&self, name: &str) -> String {
        format!("{}{}", self.table_prefix(), name)
    }

    fn wrap_segment(&self, segment: &str) -> String {
        if segment == "*" {
            return segment.to_string();
        }
        format!("\"{}\"", truncate_identifier(segment).replace('"', "\"\""))
    }
}
