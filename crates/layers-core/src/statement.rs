//! Conditions in, statements out.

use std::fmt;

use crate::value::{SqlValue, ToSqlValue};

/// A raw boolean SQL fragment with its positional bindings.
///
/// The number of `?` placeholders in `sql` must match the number of
/// bindings. That is the caller's contract; it is not checked here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    sql: String,
    bindings: Vec<SqlValue>,
}

impl Condition {
    /// Creates a condition with no bindings yet.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            bindings: vec![],
        }
    }

    /// Appends the next positional binding.
    #[must_use]
    pub fn bind<T: ToSqlValue>(mut self, value: T) -> Self {
        self.bindings.push(value.to_sql_value());
        self
    }

    /// Appends several bindings in order.
    #[must_use]
    pub fn bind_all<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToSqlValue,
    {
        self.bindings
            .extend(values.into_iter().map(ToSqlValue::to_sql_value));
        self
    }

    /// The SQL fragment.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bindings in placeholder order.
    #[must_use]
    pub fn bindings(&self) -> &[SqlValue] {
        &self.bindings
    }

    /// Returns whether the fragment is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.sql.trim().is_empty()
    }

    pub(crate) fn into_bindings(self) -> Vec<SqlValue> {
        self.bindings
    }
}

impl From<&str> for Condition {
    fn from(sql: &str) -> Self {
        Self::new(sql)
    }
}

impl From<String> for Condition {
    fn from(sql: String) -> Self {
        Self::new(sql)
    }
}

/// What a compiled statement does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `INSERT INTO ...`
    Insert,
    /// `SELECT ...` returning rows.
    Select,
    /// `UPDATE ...`
    Update,
    /// `DELETE FROM ...`
    Delete,
    /// `SELECT COUNT(*) ...` returning one scalar.
    Count,
    /// `SELECT EXISTS (...)` returning one scalar.
    Exists,
    /// `TRUNCATE TABLE ...`
    Truncate,
    /// Caller-written SQL.
    Raw,
    /// DDL produced by a blueprint.
    Schema,
}

/// Compiled SQL text plus the bindings to send with it, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    kind: StatementKind,
    sql: String,
    bindings: Vec<SqlValue>,
}

impl Statement {
    /// Wraps already-compiled text.
    #[must_use]
    pub fn new(kind: StatementKind, sql: impl Into<String>, bindings: Vec<SqlValue>) -> Self {
        Self {
            kind,
            sql: sql.into(),
            bindings,
        }
    }

    /// The statement kind.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        self.kind
    }

    /// The SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bindings, in placeholder order.
    #[must_use]
    pub fn bindings(&self) -> &[SqlValue] {
        &self.bindings
    }

    /// Splits into SQL text and bindings.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.bindings)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
