//! Compiled DDL values.

use std::fmt;

/// Terminator used while isql runs with a switched `SET TERM`.
const ISQL_TERMINATOR: char = '^';

/// One unit of compiled SQL.
///
/// Guarded drops compile to an `EXECUTE BLOCK` script containing several
/// PSQL statements. It is kept apart from plain statements so callers can
/// decide how to execute it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ddl {
    /// A single DDL statement.
    Statement(String),
    /// A procedural `EXECUTE BLOCK` script, executed as one unit.
    Script(String),
}

impl Ddl {
    /// Returns the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        match self {
            Self::Statement(sql) | Self::Script(sql) => sql,
        }
    }

    /// Consumes the value and returns the SQL text.
    #[must_use]
    pub fn into_sql(self) -> String {
        match self {
            Self::Statement(sql) | Self::Script(sql) => sql,
        }
    }

    /// Returns true for procedural scripts.
    #[must_use]
    pub fn is_script(&self) -> bool {
        matches!(self, Self::Script(_))
    }
}

impl fmt::Display for Ddl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql())
    }
}

impl AsRef<str> for Ddl {
    fn as_ref(&self) -> &str {
        self.sql()
    }
}

/// Renders statements as an isql script.
///
/// Trigger bodies and `EXECUTE BLOCK` scripts contain `;`, so the whole
/// script runs under `SET TERM ^ ;` and every statement ends with `^`.
#[must_use]
pub fn to_isql_script(statements: &[Ddl]) -> String {
    let mut script = format!("SET TERM {ISQL_TERMINATOR} ;\n\n");
    for ddl in statements {
        script.push_str(ddl.sql());
        script.push(ISQL_TERMINATOR);
        script.push_str("\n\n");
    }
    script.push_str(&format!("SET TERM ; {ISQL_TERMINATOR}\n"));
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddl_accessors() {
        let stmt = Ddl::Statement("DROP TABLE \"users\"".into());
        assert_eq!(stmt.sql(), "DROP TABLE \"users\"");
        assert!(!stmt.is_script());
        assert_eq!(stmt.to_string(), "DROP TABLE \"users\"");

        let script = Ddl::Script("EXECUTE BLOCK\nAS\nBEGIN\nEND".into());
        assert!(script.is_script());
        assert_eq!(script.into_sql(), "EXECUTE BLOCK\nAS\nBEGIN\nEND");
    }

    #[test]
    fn test_to_isql_script() {
        let script = to_isql_script(&[
            Ddl::Statement("CREATE SEQUENCE \"GEN_users_ID\"".into()),
            Ddl::Script("EXECUTE BLOCK\nAS\nBEGIN\nEND".into()),
        ]);

        assert!(script.starts_with("SET TERM ^ ;\n"));
        assert!(script.contains("CREATE SEQUENCE \"GEN_users_ID\"^\n"));
        assert!(script.contains("BEGIN\nEND^\n"));
        assert!(script.ends_with("SET TERM ; ^\n"));
    }

    #[test]
    fn test_to_isql_script_empty() {
        assert_eq!(to_isql_script(&[]), "SET TERM ^ ;\n\nSET TERM ; ^\n");
    }
}
