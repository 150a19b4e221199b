//! Generators: auto-increment emulation and standalone sequences.
//!
//! Emulation objects are named after the prefixed table: `GEN_<table>_ID`
//! for the generator and `TR_<table>_BI` for the trigger, both cut to 31
//! characters. The same names are derived when dropping, so a table created
//! with truncated names is cleaned up with the identical names.

use crate::blueprint::Blueprint;
use crate::error::{GrammarError, Result};
use crate::schema::quote_literal;
use crate::sequence::SequenceBlueprint;

use super::catalog::{GENERATORS, TRIGGERS};
use super::{Grammar, truncate_identifier};

impl Grammar {
    /// Name of the generator emulating auto-increment for `table`.
    #[must_use]
    pub fn table_sequence_name(&self, table: &str) -> String {
        let name = format!("GEN_{}{}_ID", self.table_prefix(), table);
        truncate_identifier(&name).to_string()
    }

    /// Name of the `BEFORE INSERT` trigger emulating auto-increment for `table`.
    #[must_use]
    pub fn table_trigger_name(&self, table: &str) -> String {
        let name = format!("TR_{}{}_BI", self.table_prefix(), table);
        truncate_identifier(&name).to_string()
    }

    pub(crate) fn compile_sequence_for_table(&self, blueprint: &Blueprint) -> String {
        format!(
            "CREATE SEQUENCE {}",
            self.wrap(&self.table_sequence_name(&blueprint.table))
        )
    }

    pub(crate) fn compile_trigger_for_autoincrement(
        &self,
        blueprint: &Blueprint,
        column: &str,
    ) -> Result<String> {
        if column.is_empty() {
            return Err(GrammarError::MissingTriggerColumn(blueprint.table.clone()));
        }

        let trigger = self.wrap(&self.table_trigger_name(&blueprint.table));
        let sequence = self.wrap(&self.table_sequence_name(&blueprint.table));
        let table = self.wrap_table(&blueprint.table);
        let column = self.wrap(column);

        Ok([
            format!("CREATE OR ALTER TRIGGER {trigger} FOR {table}"),
            "ACTIVE BEFORE INSERT".to_string(),
            "AS".to_string(),
            "BEGIN".to_string(),
            format!("  IF (NEW.{column} IS NULL) THEN"),
            format!("    NEW.{column} = GEN_ID({sequence}, 1);"),
            "END".to_string(),
        ]
        .join("\n"))
    }

    /// Drops the emulation trigger and generator, each only if it exists.
    pub(crate) fn compile_drop_sequence_for_table(&self, blueprint: &Blueprint) -> String {
        let trigger = self.table_trigger_name(&blueprint.table);
        let sequence = self.table_sequence_name(&blueprint.table);

        execute_block(&[
            guarded_drop(
                TRIGGERS,
                "RDB$TRIGGER_NAME",
                &trigger,
                &format!("DROP TRIGGER {}", self.wrap(&trigger)),
            ),
            guarded_drop(
                GENERATORS,
                "RDB$GENERATOR_NAME",
                &sequence,
                &format!("DROP SEQUENCE {}", self.wrap(&sequence)),
            ),
        ])
    }

    /// `CREATE SEQUENCE`, with `START WITH` and `INCREMENT BY` only when they
    /// differ from 0 and 1.
    pub(crate) fn compile_create_sequence(&self, sequence: &SequenceBlueprint) -> Result<String> {
        require_sequence_name(sequence)?;
        let mut sql = format!("CREATE SEQUENCE {}", self.wrap_sequence(sequence));

        if let Some(start) = sequence.start.filter(|start| *start != 0) {
            sql.push_str(&format!(" START WITH {start}"));
        }
        if sequence.increment != 1 {
            sql.push_str(&format!(" INCREMENT BY {}", sequence.increment));
        }

        Ok(sql)
    }

    pub(crate) fn compile_alter_sequence(&self, sequence: &SequenceBlueprint) -> Result<String> {
        require_sequence_name(sequence)?;
        let mut sql = format!("ALTER SEQUENCE {}", self.wrap_sequence(sequence));

        if sequence.restart {
            sql.push_str(" RESTART");
            if let Some(start) = sequence.start {
                sql.push_str(&format!(" WITH {start}"));
            }
        }
        if sequence.increment != 1 {
            sql.push_str(&format!(" INCREMENT BY {}", sequence.increment));
        }

        Ok(sql)
    }

    pub(crate) fn compile_drop_sequence(&self, sequence: &SequenceBlueprint) -> Result<String> {
        require_sequence_name(sequence)?;
        Ok(format!("DROP SEQUENCE {}", self.wrap_sequence(sequence)))
    }

    pub(crate) fn compile_drop_sequence_if_exists(
        &self,
        sequence: &SequenceBlueprint,
    ) -> Result<String> {
        require_sequence_name(sequence)?;
        let name = self.table_name(&sequence.sequence);

        Ok(execute_block(&[guarded_drop(
            GENERATORS,
            "RDB$GENERATOR_NAME",
            &name,
            &format!("DROP SEQUENCE {}", self.wrap_sequence(sequence)),
        )]))
    }
}

fn require_sequence_name(sequence: &SequenceBlueprint) -> Result<()> {
    if sequence.sequence.is_empty() {
        return Err(GrammarError::EmptySequenceName);
    }
    Ok(())
}

/// `IF (EXISTS(...)) THEN EXECUTE STATEMENT '<statement>';`
fn guarded_drop(catalog: &str, name_column: &str, name: &str, statement: &str) -> String {
    format!(
        "  IF (EXISTS(SELECT * FROM {catalog} WHERE {name_column} = {})) THEN\n    \
         EXECUTE STATEMENT {};",
        quote_literal(name),
        quote_literal(statement)
    )
}

fn execute_block(body: &[String]) -> String {
    format!("EXECUTE BLOCK\nAS\nBEGIN\n{}\nEND", body.join("\n"))
}
