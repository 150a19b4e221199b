//! Existence probes against the Firebird system catalog.

use crate::schema::quote_literal;

use super::Grammar;

pub(super) const RELATIONS: &str = "RDB$RELATIONS";
pub(super) const RELATION_FIELDS: &str = "RDB$RELATION_FIELDS";
pub(super) const GENERATORS: &str = "RDB$GENERATORS";
pub(super) const TRIGGERS: &str = "RDB$TRIGGERS";

impl Grammar {
    /// Query checking for a table; binds the catalog table name.
    ///
    /// See [`Grammar::table_name`] for the value to bind.
    #[must_use]
    pub fn compile_table_exists(&self) -> String {
        format!("SELECT * FROM {RELATIONS} WHERE RDB$RELATION_NAME = ?")
    }

    /// Query listing the trimmed column names of `table`.
    #[must_use]
    pub fn compile_column_exists(&self, table: &str) -> String {
        format!(
            "SELECT TRIM(RDB$FIELD_NAME) AS \"column_name\" FROM {RELATION_FIELDS} \
             WHERE RDB$RELATION_NAME = {}",
            quote_literal(&self.table_name(table))
        )
    }

    /// Query checking for a sequence; binds the sequence name.
    #[must_use]
    pub fn compile_sequence_exists(&self) -> String {
        format!("SELECT * FROM {GENERATORS} WHERE RDB$GENERATOR_NAME = ?")
    }

    /// Query checking for a trigger; binds the trigger name.
    #[must_use]
    pub fn compile_trigger_exists(&self) -> String {
        format!("SELECT * FROM {TRIGGERS} WHERE RDB$TRIGGER_NAME = ?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrammarConfig;

    #[test]
    fn test_table_exists() {
        assert_eq!(
            Grammar::default().compile_table_exists(),
            "SELECT * FROM RDB$RELATIONS WHERE RDB$RELATION_NAME = ?"
        );
    }

    #[test]
    fn test_column_exists() {
        let grammar = Grammar::new(GrammarConfig::new().table_prefix("app_"));
        assert_eq!(
            grammar.compile_column_exists("users"),
            "SELECT TRIM(RDB$FIELD_NAME) AS \"column_name\" FROM RDB$RELATION_FIELDS \
             WHERE RDB$RELATION_NAME = 'app_users'"
        );
    }

    #[test]
    fn test_column_exists_escapes_table() {
        let sql = Grammar::default().compile_column_exists("o'brien");
        assert!(sql.ends_with("= 'o''brien'"));
    }

    #[test]
    fn test_sequence_and_trigger_exists() {
        let grammar = Grammar::default();
        assert_eq!(
            grammar.compile_sequence_exists(),
            "SELECT * FROM RDB$GENERATORS WHERE RDB$GENERATOR_NAME = ?"
        );
        assert_eq!(
            grammar.compile_trigger_exists(),
            "SELECT * FROM RDB$TRIGGERS WHERE RDB$TRIGGER_NAME = ?"
        );
    }
}
