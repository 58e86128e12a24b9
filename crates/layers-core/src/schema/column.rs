//! Column definitions: base type plus ordered modifiers.

use std::fmt;

/// Base column types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// Auto-incrementing integer primary key, declared inline.
    Increments,
    /// `VARCHAR(len)`
    String(u32),
    /// `INT`
    Integer,
    /// `TINYINT(1)`
    Boolean,
    /// `TEXT`
    Text,
    /// `DATE`
    Date,
    /// `DATETIME`
    DateTime,
    /// `DECIMAL(precision, scale)`
    Decimal(u8, u8),
    /// `FLOAT(precision, scale)`
    Float(u8, u8),
    /// `DOUBLE(precision, scale)`
    Double(u8, u8),
    /// `TIME`
    Time,
    /// `TIMESTAMP`
    Timestamp,
    /// `ENUM('a', 'b', ...)`
    Enum(Vec<String>),
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increments => f.write_str("INT AUTO_INCREMENT PRIMARY KEY"),
            Self::String(len) => write!(f, "VARCHAR({len})"),
            Self::Integer => f.write_str("INT"),
            Self::Boolean => f.write_str("TINYINT(1)"),
            Self::Text => f.write_str("TEXT"),
            Self::Date => f.write_str("DATE"),
            Self::DateTime => f.write_str("DATETIME"),
            Self::Decimal(p, s) => write!(f, "DECIMAL({p}, {s})"),
            Self::Float(p, s) => write!(f, "FLOAT({p}, {s})"),
            Self::Double(p, s) => write!(f, "DOUBLE({p}, {s})"),
            Self::Time => f.write_str("TIME"),
            Self::Timestamp => f.write_str("TIMESTAMP"),
            Self::Enum(values) => {
                let quoted: Vec<String> = values.iter().map(|v| quote(v)).collect();
                write!(f, "ENUM({})", quoted.join(", "))
            }
        }
    }
}

/// Default value for a column.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// NULL default.
    Null,
    /// Boolean default.
    Boolean(bool),
    /// Integer default.
    Integer(i64),
    /// Float default.
    Float(f64),
    /// String default.
    String(String),
    /// Raw SQL expression (e.g., CURRENT_TIMESTAMP).
    Expression(String),
}

impl DefaultValue {
    /// Returns the SQL representation of the default value.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Boolean(b) => {
                if *b {
                    String::from("TRUE")
                } else {
                    String::from("FALSE")
                }
            }
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => quote(s),
            Self::Expression(expr) => expr.clone(),
        }
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for DefaultValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A clause following the column type, rendered in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    /// `NULL`
    Nullable,
    /// `NOT NULL`
    NotNullable,
    /// `DEFAULT <value>`
    Default(DefaultValue),
    /// `UNSIGNED`
    Unsigned,
    /// `ON UPDATE <expr>`
    OnUpdate(String),
    /// `COMMENT '<text>'`
    Comment(String),
    /// `AFTER <column>`
    After(String),
    /// `FIRST`
    First,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nullable => f.write_str("NULL"),
            Self::NotNullable => f.write_str("NOT NULL"),
            Self::Default(value) => write!(f, "DEFAULT {}", value.to_sql()),
            Self::Unsigned => f.write_str("UNSIGNED"),
            Self::OnUpdate(expr) => write!(f, "ON UPDATE {expr}"),
            Self::Comment(text) => write!(f, "COMMENT {}", quote(text)),
            Self::After(column) => write!(f, "AFTER {column}"),
            Self::First => f.write_str("FIRST"),
        }
    }
}

/// A declared column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Base type.
    pub column_type: ColumnType,
    /// Modifiers in declaration order.
    pub modifiers: Vec<Modifier>,
}

impl Column {
    /// Creates a column with no modifiers.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            modifiers: vec![],
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.column_type)?;
        for modifier in &self.modifiers {
            write!(f, " {modifier}")?;
        }
        Ok(())
    }
}

/// Foreign key referential action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForeignKeyAction {
    /// No action.
    NoAction,
    /// Restrict deletion/update.
    Restrict,
    /// Cascade the operation.
    #[default]
    Cascade,
    /// Set to NULL.
    SetNull,
    /// Set to default value.
    SetDefault,
}

impl ForeignKeyAction {
    /// Returns the SQL representation of the action.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

/// Single-quotes a string literal, doubling embedded quotes.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
