//! Column modifier pipeline.
//!
//! Modifiers are appended after the column type in a fixed order:
//! character set, collation, increment, nullability, default. Identity and
//! primary key clauses must come before NOT NULL and DEFAULT in Firebird's
//! column grammar.

use crate::blueprint::Blueprint;
use crate::config::IdentityMode;
use crate::error::{GrammarError, Result};
use crate::schema::Column;

use super::Grammar;

/// A column modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `CHARACTER SET`.
    Charset,
    /// `COLLATE`.
    Collate,
    /// Identity or primary key clause for serial columns.
    Increment,
    /// `NOT NULL`.
    Nullable,
    /// `DEFAULT`.
    Default,
}

type ModifierFn = fn(&Grammar, &Blueprint, &Column) -> Option<String>;

/// Modifiers in application order.
pub const MODIFIERS: [(Modifier, ModifierFn); 5] = [
    (Modifier::Charset, Grammar::modify_charset),
    (Modifier::Collate, Grammar::modify_collate),
    (Modifier::Increment, Grammar::modify_increment),
    (Modifier::Nullable, Grammar::modify_nullable),
    (Modifier::Default, Grammar::modify_default),
];

impl Grammar {
    /// Returns the full definition of `column`: name, type and modifiers.
    ///
    /// Fails for a NaN or infinite float default.
    pub fn column_definition(&self, blueprint: &Blueprint, column: &Column) -> Result<String> {
        if column.default.as_ref().is_some_and(|value| !value.is_finite()) {
            return Err(GrammarError::NonFiniteDefault(column.name.clone()));
        }
        Ok(format!(
            "{} {}{}",
            self.wrap(&column.name),
            self.type_for(column)?,
            self.modifiers_for(blueprint, column)
        ))
    }

    /// Returns the definitions of every blueprint column.
    pub fn columns(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        blueprint
            .columns
            .iter()
            .map(|column| self.column_definition(blueprint, column))
            .collect()
    }

    /// Returns the modifier suffix of `column`.
    #[must_use]
    pub fn modifiers_for(&self, blueprint: &Blueprint, column: &Column) -> String {
        MODIFIERS
            .iter()
            .filter_map(|(_, modify)| modify(self, blueprint, column))
            .collect()
    }

    fn modify_charset(&self, _blueprint: &Blueprint, column: &Column) -> Option<String> {
        column
            .charset
            .as_ref()
            .map(|charset| format!(" CHARACTER SET {charset}"))
    }

    fn modify_collate(&self, _blueprint: &Blueprint, column: &Column) -> Option<String> {
        column
            .collation
            .as_ref()
            .map(|collation| format!(" COLLATE {collation}"))
    }

    fn modify_increment(&self, blueprint: &Blueprint, column: &Column) -> Option<String> {
        if !column.is_serial() {
            return None;
        }
        let clause = match self.identity_mode(blueprint) {
            IdentityMode::Native => " GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY",
            IdentityMode::Emulated => " PRIMARY KEY",
        };
        Some(clause.to_string())
    }

    fn modify_nullable(&self, _blueprint: &Blueprint, column: &Column) -> Option<String> {
        (!column.nullable).then(|| " NOT NULL".to_string())
    }

    fn modify_default(&self, _blueprint: &Blueprint, column: &Column) -> Option<String> {
        column
            .default
            .as_ref()
            .map(|value| format!(" DEFAULT {}", value.to_sql()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrammarConfig;
    use crate::schema::{ColumnType, DefaultValue};

    fn blueprint() -> Blueprint {
        Blueprint::new("users")
    }

    #[test]
    fn test_modifier_order() {
        let order: Vec<Modifier> = MODIFIERS.iter().map(|(m, _)| *m).collect();
        assert_eq!(
            order,
            vec![
                Modifier::Charset,
                Modifier::Collate,
                Modifier::Increment,
                Modifier::Nullable,
                Modifier::Default,
            ]
        );
    }

    #[test]
    fn test_all_modifiers_in_order() {
        let column = Column::new("id", ColumnType::Integer)
            .auto_increment()
            .charset("UTF8")
            .collation("UNICODE_CI")
            .default(DefaultValue::Integer(0));

        let suffix = Grammar::default().modifiers_for(&blueprint(), &column);
        assert_eq!(
            suffix,
            " CHARACTER SET UTF8 COLLATE UNICODE_CI PRIMARY KEY NOT NULL DEFAULT 0"
        );
    }

    #[test]
    fn test_nullable_emits_nothing() {
        let column = Column::string("nickname").nullable();
        assert_eq!(Grammar::default().modifiers_for(&blueprint(), &column), "");
    }

    #[test]
    fn test_increment_native_identity() {
        let grammar = Grammar::new(GrammarConfig::new().identity(IdentityMode::Native));
        let column = Column::big_increments("id");
        assert_eq!(
            grammar.modifiers_for(&blueprint(), &column),
            " GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY NOT NULL"
        );
    }

    #[test]
    fn test_blueprint_identity_override() {
        let grammar = Grammar::default();
        let native = blueprint().identity(IdentityMode::Native);
        let column = Column::increments("id");
        assert_eq!(
            grammar.modifiers_for(&native, &column),
            " GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY NOT NULL"
        );
    }

    #[test]
    fn test_increment_ignored_on_ineligible_type() {
        let column = Column::string("code").auto_increment();
        assert_eq!(
            Grammar::default().modifiers_for(&blueprint(), &column),
            " NOT NULL"
        );
    }

    #[test]
    fn test_default_values() {
        let g = Grammar::default();
        let column = Column::new("active", ColumnType::Boolean).default(DefaultValue::Bool(true));
        assert_eq!(g.modifiers_for(&blueprint(), &column), " NOT NULL DEFAULT '1'");

        let column = Column::string("role")
            .nullable()
            .default(DefaultValue::String("o'neil".into()));
        assert_eq!(g.modifiers_for(&blueprint(), &column), " DEFAULT 'o''neil'");
    }

    #[test]
    fn test_column_definition() {
        let column = Column::string("email").collation("UNICODE_CI");
        assert_eq!(
            Grammar::default()
                .column_definition(&blueprint(), &column)
                .unwrap(),
            "\"email\" VARCHAR(255) COLLATE UNICODE_CI NOT NULL"
        );
    }

    #[test]
    fn test_non_finite_float_default_is_rejected() {
        let g = Grammar::default();
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let column =
                Column::new("ratio", ColumnType::Double).default(DefaultValue::Float(value));
            let err = g.column_definition(&blueprint(), &column).unwrap_err();
            assert!(matches!(err, GrammarError::NonFiniteDefault(name) if name == "ratio"));
        }

        let column = Column::new("ratio", ColumnType::Double).default(DefaultValue::Float(0.5));
        assert_eq!(
            g.column_definition(&blueprint(), &column).unwrap(),
            "\"ratio\" DOUBLE PRECISION NOT NULL DEFAULT 0.5"
        );
    }
}
