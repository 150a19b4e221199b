//! Column model types.
//!
//! These types describe the columns a blueprint creates or adds. They are
//! built by the schema builder (or deserialized from JSON) and only read by
//! the grammar.

use serde::{Deserialize, Serialize};

/// Default length of `string` and `char` columns.
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// Abstract column types understood by the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Fixed-length character string.
    Char(u32),
    /// Variable-length character string.
    String(u32),
    /// Text blob.
    Text,
    /// Medium text blob.
    MediumText,
    /// Long text blob.
    LongText,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInteger,
    /// 24-bit integer (stored as 32-bit).
    MediumInteger,
    /// 8-bit integer (stored as 16-bit).
    TinyInteger,
    /// 16-bit integer.
    SmallInteger,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Decimal with total digits and scale.
    Decimal {
        /// Total number of digits.
        total: u8,
        /// Digits after the decimal point.
        places: u8,
    },
    /// Numeric (fixed precision).
    Numeric,
    /// Boolean.
    Boolean,
    /// String restricted to a set of values.
    Enum(Vec<String>),
    /// JSON document.
    Json,
    /// Binary JSON document.
    Jsonb,
    /// Date only.
    Date,
    /// Date and time.
    DateTime,
    /// Time only.
    Time,
    /// Time with time zone.
    TimeTz,
    /// Timestamp.
    Timestamp,
    /// Timestamp with time zone.
    TimestampTz,
    /// Binary blob.
    Binary,
    /// UUID.
    Uuid,
    /// IPv4/IPv6 address.
    IpAddress,
    /// MAC address.
    MacAddress,
}

impl ColumnType {
    /// Returns true for the integer family, the only types that can
    /// auto-increment.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Integer
                | Self::BigInteger
                | Self::MediumInteger
                | Self::TinyInteger
                | Self::SmallInteger
        )
    }
}

/// Default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    /// Boolean default, stored as `'1'`/`'0'`.
    Bool(bool),
    /// Integer default.
    Integer(i64),
    /// Float default.
    Float(f64),
    /// String default.
    String(String),
    /// SQL expression (e.g., "CURRENT_TIMESTAMP"), emitted verbatim.
    Expression(String),
}

impl DefaultValue {
    /// Returns the SQL literal for this default value.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Bool(b) => if *b { "'1'" } else { "'0'" }.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => quote_literal(s),
            Self::Expression(expr) => expr.clone(),
        }
    }

    /// Returns false for NaN and infinite float defaults.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Float(f) => f.is_finite(),
            _ => true,
        }
    }
}

/// Quotes a string literal, doubling embedded single quotes.
#[must_use]
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Foreign key action (ON DELETE, ON UPDATE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeignKeyAction {
    /// No action (error if referenced row is deleted/updated).
    NoAction,
    /// Cascade the delete/update to referencing rows.
    Cascade,
    /// Set the foreign key column to NULL.
    SetNull,
    /// Set the foreign key column to its default value.
    SetDefault,
}

impl ForeignKeyAction {
    /// Returns the SQL representation of this action.
    #[must_use]
    pub fn to_sql(&self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Abstract type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Whether the column allows NULL values.
    #[serde(default)]
    pub nullable: bool,
    /// Default value.
    #[serde(default)]
    pub default: Option<DefaultValue>,
    /// Whether this column auto-increments.
    #[serde(default)]
    pub auto_increment: bool,
    /// Character set.
    #[serde(default)]
    pub charset: Option<String>,
    /// Collation.
    #[serde(default)]
    pub collation: Option<String>,
    /// Timestamp columns only: default to the current time.
    #[serde(default)]
    pub use_current: bool,
}

impl Column {
    /// Creates a NOT NULL column of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
            default: None,
            auto_increment: false,
            charset: None,
            collation: None,
            use_current: false,
        }
    }

    /// Auto-incrementing integer key.
    #[must_use]
    pub fn increments(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Integer).auto_increment()
    }

    /// Auto-incrementing big integer key.
    #[must_use]
    pub fn big_increments(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::BigInteger).auto_increment()
    }

    /// Variable-length string of the default length.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::String(DEFAULT_STRING_LENGTH))
    }

    /// Decimal with the given total digits and scale.
    #[must_use]
    pub fn decimal(name: impl Into<String>, total: u8, places: u8) -> Self {
        Self::new(name, ColumnType::Decimal { total, places })
    }

    /// Enum column restricted to `allowed`.
    #[must_use]
    pub fn enumeration<I, S>(name: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed = allowed.into_iter().map(Into::into).collect();
        Self::new(name, ColumnType::Enum(allowed))
    }

    /// Sets the column as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Sets the column to auto-increment.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Sets the character set.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Sets the collation.
    #[must_use]
    pub fn collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }

    /// Defaults a timestamp column to the current time.
    #[must_use]
    pub fn use_current(mut self) -> Self {
        self.use_current = true;
        self
    }

    /// Returns true if this column takes part in auto-increment emulation:
    /// an integer type with the auto-increment flag set.
    #[must_use]
    pub fn is_serial(&self) -> bool {
        self.auto_increment && self.column_type.is_integer()
    }
}
