//! Column type rendering.

use crate::error::{GrammarError, Result};
use crate::schema::{Column, ColumnType, quote_literal};

use super::Grammar;

/// Length of the character fields storing JSON documents.
const JSON_LENGTH: u32 = 8191;

/// Length of the character field storing enum values.
const ENUM_LENGTH: u32 = 255;

impl Grammar {
    /// Returns the Firebird type for `column`.
    ///
    /// Firebird has no native boolean, JSON or UUID types, so those map to
    /// character fields. `Numeric` is always `NUMERIC(15, 2)`.
    pub fn type_for(&self, column: &Column) -> Result<String> {
        let sql = match &column.column_type {
            ColumnType::Char(length) => format!("CHAR({length})"),
            ColumnType::String(length) => format!("VARCHAR({length})"),
            ColumnType::Text | ColumnType::MediumText | ColumnType::LongText => {
                "BLOB SUB_TYPE TEXT".to_string()
            }
            ColumnType::Integer | ColumnType::MediumInteger => "INTEGER".to_string(),
            ColumnType::BigInteger => "BIGINT".to_string(),
            ColumnType::TinyInteger | ColumnType::SmallInteger => "SMALLINT".to_string(),
            ColumnType::Float => "FLOAT".to_string(),
            ColumnType::Double => "DOUBLE PRECISION".to_string(),
            ColumnType::Decimal { total, places } => format!("DECIMAL({total}, {places})"),
            ColumnType::Numeric => "NUMERIC(15, 2)".to_string(),
            ColumnType::Boolean => "CHAR(1)".to_string(),
            ColumnType::Enum(allowed) => self.type_enum(column, allowed)?,
            ColumnType::Json => format!("VARCHAR({JSON_LENGTH})"),
            ColumnType::Jsonb => format!("VARCHAR({JSON_LENGTH}) CHARACTER SET OCTETS"),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::DateTime => "TIMESTAMP".to_string(),
            ColumnType::Time | ColumnType::TimeTz => "TIME".to_string(),
            ColumnType::Timestamp | ColumnType::TimestampTz => {
                if column.use_current {
                    "TIMESTAMP DEFAULT CURRENT_TIMESTAMP".to_string()
                } else {
                    "TIMESTAMP".to_string()
                }
            }
            ColumnType::Binary => "BLOB SUB_TYPE BINARY".to_string(),
            ColumnType::Uuid => "CHAR(36)".to_string(),
            ColumnType::IpAddress => "VARCHAR(45)".to_string(),
            ColumnType::MacAddress => "VARCHAR(17)".to_string(),
        };
        Ok(sql)
    }

    fn type_enum(&self, column: &Column, allowed: &[String]) -> Result<String> {
        if allowed.is_empty() {
            return Err(GrammarError::EmptyEnum(column.name.clone()));
        }

        let values: Vec<String> = allowed.iter().map(|v| quote_literal(v)).collect();
        Ok(format!(
            "VARCHAR({ENUM_LENGTH}) CHECK ({} IN ({}))",
            self.wrap(&column.name),
            values.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_of(column_type: ColumnType) -> String {
        Grammar::default()
            .type_for(&Column::new("col", column_type))
            .unwrap()
    }

    #[test]
    fn test_character_types() {
        assert_eq!(type_of(ColumnType::Char(2)), "CHAR(2)");
        assert_eq!(type_of(ColumnType::String(100)), "VARCHAR(100)");
        assert_eq!(type_of(ColumnType::Uuid), "CHAR(36)");
        assert_eq!(type_of(ColumnType::IpAddress), "VARCHAR(45)");
        assert_eq!(type_of(ColumnType::MacAddress), "VARCHAR(17)");
    }

    #[test]
    fn test_text_types_share_blob() {
        assert_eq!(type_of(ColumnType::Text), "BLOB SUB_TYPE TEXT");
        assert_eq!(type_of(ColumnType::MediumText), "BLOB SUB_TYPE TEXT");
        assert_eq!(type_of(ColumnType::LongText), "BLOB SUB_TYPE TEXT");
        assert_eq!(type_of(ColumnType::Binary), "BLOB SUB_TYPE BINARY");
    }

    #[test]
    fn test_integer_types() {
        assert_eq!(type_of(ColumnType::Integer), "INTEGER");
        assert_eq!(type_of(ColumnType::MediumInteger), "INTEGER");
        assert_eq!(type_of(ColumnType::BigInteger), "BIGINT");
        assert_eq!(type_of(ColumnType::SmallInteger), "SMALLINT");
        assert_eq!(type_of(ColumnType::TinyInteger), "SMALLINT");
    }

    #[test]
    fn test_numeric_types() {
        assert_eq!(type_of(ColumnType::Float), "FLOAT");
        assert_eq!(type_of(ColumnType::Double), "DOUBLE PRECISION");
        assert_eq!(
            type_of(ColumnType::Decimal {
                total: 10,
                places: 3
            }),
            "DECIMAL(10, 3)"
        );
        assert_eq!(type_of(ColumnType::Numeric), "NUMERIC(15, 2)");
    }

    #[test]
    fn test_boolean_and_json() {
        assert_eq!(type_of(ColumnType::Boolean), "CHAR(1)");
        assert_eq!(type_of(ColumnType::Json), "VARCHAR(8191)");
        assert_eq!(
            type_of(ColumnType::Jsonb),
            "VARCHAR(8191) CHARACTER SET OCTETS"
        );
    }

    #[test]
    fn test_temporal_types() {
        assert_eq!(type_of(ColumnType::Date), "DATE");
        assert_eq!(type_of(ColumnType::DateTime), "TIMESTAMP");
        assert_eq!(type_of(ColumnType::Time), "TIME");
        assert_eq!(type_of(ColumnType::TimeTz), "TIME");
        assert_eq!(type_of(ColumnType::Timestamp), "TIMESTAMP");
        assert_eq!(type_of(ColumnType::TimestampTz), "TIMESTAMP");
    }

    #[test]
    fn test_timestamp_use_current() {
        let column = Column::new("created_at", ColumnType::Timestamp).use_current();
        assert_eq!(
            Grammar::default().type_for(&column).unwrap(),
            "TIMESTAMP DEFAULT CURRENT_TIMESTAMP"
        );

        let column = Column::new("seen_at", ColumnType::TimestampTz).use_current();
        assert_eq!(
            Grammar::default().type_for(&column).unwrap(),
            "TIMESTAMP DEFAULT CURRENT_TIMESTAMP"
        );
    }

    #[test]
    fn test_enum() {
        let column = Column::enumeration("status", ["draft", "published", "it's"]);
        assert_eq!(
            Grammar::default().type_for(&column).unwrap(),
            "VARCHAR(255) CHECK (\"status\" IN ('draft', 'published', 'it''s'))"
        );
    }

    #[test]
    fn test_enum_without_values() {
        let column = Column::enumeration("status", Vec::<String>::new());
        let err = Grammar::default().type_for(&column).unwrap_err();
        assert!(matches!(err, GrammarError::EmptyEnum(name) if name == "status"));
    }
}
