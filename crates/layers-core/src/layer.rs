//! Table-bound statement compilation.
//!
//! A [`Layer`] owns its table identifier. Each operation checks the table,
//! runs the matching validation, and only then compiles. Build one per
//! operation or per caller; nothing is shared between instances.

use crate::error::{LayerError, Result};
use crate::fields::FieldMap;
use crate::grammar::{MySqlGrammar, SelectOptions};
use crate::rules;
use crate::statement::{Condition, Statement, StatementKind};
use crate::value::SqlValue;

/// Compiles validated DML statements against one table.
///
/// # Example
///
/// ```rust
/// use layers_core::{Condition, FieldMap, Layer};
///
/// let statement = Layer::table("users")
///     .update(
///         FieldMap::new().set("name", "Bob").set("age", 31),
///         Condition::new("id = ?").bind(7),
///     )
///     .unwrap();
///
/// assert_eq!(statement.sql(), "UPDATE users SET name = ?, age = ? WHERE id = ?");
/// assert_eq!(statement.bindings().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Layer {
    table: Option<String>,
    grammar: MySqlGrammar,
}

impl Layer {
    /// Creates a layer with no table bound yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a layer bound to `table`.
    #[must_use]
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            grammar: MySqlGrammar::new(),
        }
    }

    /// Binds (or rebinds) the table.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// The bound table, or [`LayerError::TableNotSet`].
    pub fn table_name(&self) -> Result<&str> {
        rules::validate_table(self.table.as_deref())
    }

    /// Compiles an INSERT. Bindings are the field values in map order.
    pub fn insert(&self, fields: FieldMap) -> Result<Statement> {
        let table = self.table_name()?;
        rules::validate_insert_fields(&fields)?;

        let sql = self.grammar.compile_insert(table, &fields);
        Ok(Statement::new(StatementKind::Insert, sql, fields.bindings()))
    }

    /// Compiles `SELECT * ... WHERE <condition>`.
    pub fn select(&self, condition: impl Into<Condition>) -> Result<Statement> {
        self.select_with(condition, &SelectOptions::new())
    }

    /// Compiles a SELECT with optional GROUP BY / ORDER BY / LIMIT.
    pub fn select_with(
        &self,
        condition: impl Into<Condition>,
        options: &SelectOptions,
    ) -> Result<Statement> {
        let table = self.table_name()?;
        let condition = condition.into();
        rules::validate_condition(condition.sql())?;

        let sql = self
            .grammar
            .compile_select_with(table, condition.sql(), options);
        Ok(Statement::new(
            StatementKind::Select,
            sql,
            condition.into_bindings(),
        ))
    }

    /// Compiles `SELECT <fields> ...` with an optional condition.
    ///
    /// A blank condition counts as no condition.
    pub fn select_fields(
        &self,
        fields: &str,
        condition: Option<Condition>,
    ) -> Result<Statement> {
        let table = self.table_name()?;
        if fields.trim().is_empty() {
            return Err(LayerError::InvalidField);
        }

        let condition = condition.filter(|c| !c.is_blank());
        let sql = self.grammar.compile_select_fields(
            table,
            fields,
            condition.as_ref().map(Condition::sql),
        );
        Ok(Statement::new(
            StatementKind::Select,
            sql,
            condition.map(Condition::into_bindings).unwrap_or_default(),
        ))
    }

    /// Compiles an UPDATE. Bindings are the field values in map order,
    /// followed by the condition bindings.
    pub fn update(&self, fields: FieldMap, condition: impl Into<Condition>) -> Result<Statement> {
        let table = self.table_name()?;
        let condition = condition.into();
        rules::validate_update_fields(&fields)?;
        rules::validate_condition(condition.sql())?;

        let sql = self.grammar.compile_update(table, &fields, condition.sql());
        let mut bindings = fields.bindings();
        bindings.extend(condition.into_bindings());
        Ok(Statement::new(StatementKind::Update, sql, bindings))
    }

    /// Compiles a DELETE.
    pub fn delete(&self, condition: impl Into<Condition>) -> Result<Statement> {
        let table = self.table_name()?;
        let condition = condition.into();
        rules::validate_condition(condition.sql())?;

        let sql = self.grammar.compile_delete(table, condition.sql());
        Ok(Statement::new(
            StatementKind::Delete,
            sql,
            condition.into_bindings(),
        ))
    }

    /// Compiles a COUNT(*), optionally filtered.
    pub fn count(&self, condition: Option<Condition>) -> Result<Statement> {
        let table = self.table_name()?;
        let condition = condition.filter(|c| !c.is_blank());

        let sql = self
            .grammar
            .compile_count(table, condition.as_ref().map(Condition::sql));
        Ok(Statement::new(
            StatementKind::Count,
            sql,
            condition.map(Condition::into_bindings).unwrap_or_default(),
        ))
    }

    /// Compiles `SELECT EXISTS (...)`.
    pub fn exists(&self, condition: impl Into<Condition>) -> Result<Statement> {
        let table = self.table_name()?;
        let condition = condition.into();
        rules::validate_condition(condition.sql())?;

        let sql = self.grammar.compile_exists(table, condition.sql());
        Ok(Statement::new(
            StatementKind::Exists,
            sql,
            condition.into_bindings(),
        ))
    }

    /// Compiles a TRUNCATE.
    pub fn truncate(&self) -> Result<Statement> {
        let table = self.table_name()?;
        let sql = self.grammar.compile_truncate(table);
        Ok(Statement::new(StatementKind::Truncate, sql, vec![]))
    }

    /// Wraps caller-written SQL. No table is needed.
    #[must_use]
    pub fn raw(sql: &str, bindings: Vec<SqlValue>) -> Statement {
        let sql = MySqlGrammar::new().compile_raw(sql);
        Statement::new(StatementKind::Raw, sql, bindings)
    }
}
