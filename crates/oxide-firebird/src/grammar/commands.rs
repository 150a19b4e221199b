//! Table commands: create, drop, add, keys, indexes and foreign keys.

use crate::blueprint::{Blueprint, ForeignKey};
use crate::error::{GrammarError, Result};

use super::Grammar;

impl Grammar {
    /// `CREATE [GLOBAL TEMPORARY] TABLE`.
    pub(crate) fn compile_create(&self, blueprint: &Blueprint) -> Result<String> {
        require_columns("create", blueprint, blueprint.columns.len())?;
        let columns = self.columns(blueprint)?.join(", ");

        let mut sql = String::from(if blueprint.temporary {
            "CREATE GLOBAL TEMPORARY TABLE "
        } else {
            "CREATE TABLE "
        });
        sql.push_str(&self.wrap_table(&blueprint.table));
        sql.push_str(&format!(" ({columns})"));

        if blueprint.temporary {
            sql.push_str(if blueprint.preserve {
                " ON COMMIT PRESERVE ROWS"
            } else {
                " ON COMMIT DELETE ROWS"
            });
        }

        Ok(sql)
    }

    pub(crate) fn compile_drop(&self, blueprint: &Blueprint) -> String {
        format!("DROP TABLE {}", self.wrap_table(&blueprint.table))
    }

    /// One `ALTER TABLE` adding every blueprint column.
    pub(crate) fn compile_add(&self, blueprint: &Blueprint) -> Result<String> {
        require_columns("add", blueprint, blueprint.columns.len())?;
        let columns: Vec<String> = self
            .columns(blueprint)?
            .into_iter()
            .map(|definition| format!("ADD {definition}"))
            .collect();

        Ok(format!(
            "ALTER TABLE {} {}",
            self.wrap_table(&blueprint.table),
            columns.join(", ")
        ))
    }

    pub(crate) fn compile_primary(
        &self,
        blueprint: &Blueprint,
        columns: &[String],
    ) -> Result<String> {
        require_columns("primary", blueprint, columns.len())?;
        Ok(format!(
            "ALTER TABLE {} ADD PRIMARY KEY ({})",
            self.wrap_table(&blueprint.table),
            self.columnize(columns)
        ))
    }

    pub(crate) fn compile_unique(
        &self,
        blueprint: &Blueprint,
        index: Option<&str>,
        columns: &[String],
    ) -> Result<String> {
        let index = self.index_or_default(blueprint, "unique", index, columns);
        require_name("unique", blueprint, &index)?;
        require_columns("unique", blueprint, columns.len())?;
        Ok(format!(
            "ALTER TABLE {} ADD CONSTRAINT {} UNIQUE ({})",
            self.wrap_table(&blueprint.table),
            self.wrap(&index),
            self.columnize(columns)
        ))
    }

    /// Indexes are standalone objects in Firebird, not table constraints.
    pub(crate) fn compile_index(
        &self,
        blueprint: &Blueprint,
        index: Option<&str>,
        columns: &[String],
    ) -> Result<String> {
        let index = self.index_or_default(blueprint, "index", index, columns);
        require_name("index", blueprint, &index)?;
        require_columns("index", blueprint, columns.len())?;
        Ok(format!(
            "CREATE INDEX {} ON {} ({})",
            self.wrap(&index),
            self.wrap_table(&blueprint.table),
            self.columnize(columns)
        ))
    }

    pub(crate) fn compile_foreign(
        &self,
        blueprint: &Blueprint,
        foreign: &ForeignKey,
    ) -> Result<String> {
        let index = self.index_or_default(
            blueprint,
            "foreign",
            foreign.index.as_deref(),
            &foreign.columns,
        );
        require_name("foreign", blueprint, &index)?;
        require_columns("foreign", blueprint, foreign.columns.len())?;
        let on = foreign
            .on
            .as_deref()
            .filter(|table| !table.is_empty())
            .ok_or_else(|| GrammarError::MissingReferencedTable {
                table: blueprint.table.clone(),
                constraint: index.clone(),
            })?;
        if foreign.references.is_empty() {
            return Err(GrammarError::MissingReferencedColumns {
                table: blueprint.table.clone(),
                constraint: index.clone(),
            });
        }

        let mut sql = format!(
            "ALTER TABLE {} ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
            self.wrap_table(&blueprint.table),
            self.wrap(&index),
            self.columnize(&foreign.columns),
            self.wrap_table(on),
            self.columnize(&foreign.references)
        );

        if let Some(action) = foreign.on_delete {
            sql.push_str(" ON DELETE ");
            sql.push_str(action.to_sql());
        }
        if let Some(action) = foreign.on_update {
            sql.push_str(" ON UPDATE ");
            sql.push_str(action.to_sql());
        }

        Ok(sql)
    }

    pub(crate) fn compile_drop_foreign(
        &self,
        blueprint: &Blueprint,
        index: &str,
    ) -> Result<String> {
        require_name("dropForeign", blueprint, index)?;
        Ok(format!(
            "ALTER TABLE {} DROP CONSTRAINT {}",
            self.wrap_table(&blueprint.table),
            self.wrap(index)
        ))
    }

    /// The explicit name, or one generated from the prefixed table.
    fn index_or_default(
        &self,
        blueprint: &Blueprint,
        kind: &str,
        index: Option<&str>,
        columns: &[String],
    ) -> String {
        index.map_or_else(
            || self.index_name(&blueprint.table, kind, columns),
            str::to_string,
        )
    }
}

fn require_columns(command: &'static str, blueprint: &Blueprint, count: usize) -> Result<()> {
    if count == 0 {
        return Err(GrammarError::EmptyColumns {
            command,
            table: blueprint.table.clone(),
        });
    }
    Ok(())
}

fn require_name(command: &'static str, blueprint: &Blueprint, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GrammarError::EmptyName {
            command,
            table: blueprint.table.clone(),
        });
    }
    Ok(())
}
