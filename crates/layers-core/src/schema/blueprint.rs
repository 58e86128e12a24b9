//! Fluent table blueprint compiled into one DDL statement.
//!
//! Column methods return a [`ColumnDefinition`] handle. Modifiers and
//! column-level constraints called on a handle apply to that column only,
//! whatever was declared after it. Table-level constraints take the column
//! names explicitly.

use super::column::{Column, ColumnType, DefaultValue, ForeignKeyAction, Modifier};
use crate::error::{LayerError, Result};
use crate::rules;

/// A foreign key declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Local column.
    pub column: String,
    /// Referenced table.
    pub on: String,
    /// Referenced column.
    pub references: String,
    /// Action on delete.
    pub on_delete: ForeignKeyAction,
    /// Action on update.
    pub on_update: ForeignKeyAction,
}

impl ForeignKey {
    fn to_sql(&self) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {}({}) ON DELETE {} ON UPDATE {}",
            self.column,
            self.on,
            self.references,
            self.on_delete.as_sql(),
            self.on_update.as_sql()
        )
    }
}

/// One entry of the column list. Declared columns are referenced by their
/// index in [`Blueprint::columns`].
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Column(usize),
    DropColumn(String),
    RenameColumn { from: String, to: String },
    ChangeColumn { name: String, definition: Column },
    RenameTable(String),
}

impl Entry {
    fn create_sql(&self, columns: &[Column]) -> String {
        match self {
            Self::Column(index) => columns[*index].to_string(),
            Self::DropColumn(name) => format!("DROP COLUMN {name}"),
            Self::RenameColumn { from, to } => format!("RENAME COLUMN {from} TO {to}"),
            Self::ChangeColumn { name, definition } => {
                if *name == definition.name {
                    format!("MODIFY COLUMN {definition}")
                } else {
                    format!("CHANGE COLUMN {name} {definition}")
                }
            }
            Self::RenameTable(name) => format!("RENAME TO {name}"),
        }
    }

    fn alter_sql(&self, columns: &[Column]) -> String {
        match self {
            Self::Column(index) => format!("ADD COLUMN {}", columns[*index]),
            other => other.create_sql(columns),
        }
    }
}

/// Accumulates columns and constraints for one table.
///
/// # Example
///
/// ```rust
/// use layers_core::schema::Blueprint;
///
/// let mut table = Blueprint::new("users");
/// table.increments("id");
/// table.string("name", 100).nullable().unique();
///
/// assert_eq!(
///     table.to_sql().unwrap(),
///     "CREATE TABLE users (id INT AUTO_INCREMENT PRIMARY KEY, \
///      name VARCHAR(100) NULL, UNIQUE (name))"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    table: String,
    columns: Vec<Column>,
    entries: Vec<Entry>,
    primary_keys: Vec<String>,
    unique_keys: Vec<String>,
    indexes: Vec<String>,
    foreign_keys: Vec<ForeignKey>,
    checks: Vec<String>,
}

impl Blueprint {
    /// Creates an empty blueprint for `table`.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            entries: vec![],
            primary_keys: vec![],
            unique_keys: vec![],
            indexes: vec![],
            foreign_keys: vec![],
            checks: vec![],
        }
    }

    /// The table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns whether any column has been declared.
    #[must_use]
    pub fn has_columns(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Returns whether nothing at all has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
            && self.primary_keys.is_empty()
            && self.unique_keys.is_empty()
            && self.indexes.is_empty()
            && self.foreign_keys.is_empty()
            && self.checks.is_empty()
    }

    fn push_column(&mut self, name: &str, column_type: ColumnType) -> ColumnDefinition<'_> {
        let index = self.columns.len();
        self.columns.push(Column::new(name, column_type));
        self.entries.push(Entry::Column(index));
        ColumnDefinition {
            blueprint: self,
            index,
        }
    }

    // Column types

    /// `INT AUTO_INCREMENT PRIMARY KEY`
    pub fn increments(&mut self, column: &str) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::Increments)
    }

    /// `VARCHAR(length)`
    pub fn string(&mut self, column: &str, length: u32) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::String(length))
    }

    /// `INT`
    pub fn integer(&mut self, column: &str) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::Integer)
    }

    /// `TINYINT(1)`
    pub fn boolean(&mut self, column: &str) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::Boolean)
    }

    /// `TEXT`
    pub fn text(&mut self, column: &str) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::Text)
    }

    /// `DATE`
    pub fn date(&mut self, column: &str) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::Date)
    }

    /// `DATETIME`
    pub fn date_time(&mut self, column: &str) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::DateTime)
    }

    /// `DECIMAL(precision, scale)`
    pub fn decimal(&mut self, column: &str, precision: u8, scale: u8) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::Decimal(precision, scale))
    }

    /// `FLOAT(precision, scale)`
    pub fn float(&mut self, column: &str, precision: u8, scale: u8) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::Float(precision, scale))
    }

    /// `DOUBLE(precision, scale)`
    pub fn double(&mut self, column: &str, precision: u8, scale: u8) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::Double(precision, scale))
    }

    /// `TIME`
    pub fn time(&mut self, column: &str) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::Time)
    }

    /// `TIMESTAMP`
    pub fn timestamp(&mut self, column: &str) -> ColumnDefinition<'_> {
        self.push_column(column, ColumnType::Timestamp)
    }

    /// `ENUM('a', 'b', ...)`
    pub fn enumeration<I, S>(&mut self, column: &str, values: I) -> ColumnDefinition<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.push_column(column, ColumnType::Enum(values))
    }

    /// `created_at` and `updated_at` timestamps maintained by the database.
    pub fn timestamps(&mut self) -> &mut Self {
        self.timestamp("created_at")
            .default_expr("CURRENT_TIMESTAMP");
        self.timestamp("updated_at")
            .default_expr("CURRENT_TIMESTAMP")
            .on_update_expr("CURRENT_TIMESTAMP");
        self
    }

    // Table-level constraints

    /// Adds columns to the table's PRIMARY KEY clause.
    pub fn primary(&mut self, columns: &[&str]) -> &mut Self {
        self.primary_keys
            .extend(columns.iter().map(|c| (*c).to_string()));
        self
    }

    /// Adds a `UNIQUE (column)` clause.
    pub fn unique(&mut self, column: &str) -> &mut Self {
        self.unique_keys.push(column.to_string());
        self
    }

    /// Adds an `INDEX (column)` clause.
    pub fn index(&mut self, column: &str) -> &mut Self {
        self.indexes.push(column.to_string());
        self
    }

    /// Adds a `CHECK (expression)` clause.
    pub fn check(&mut self, expression: &str) -> &mut Self {
        self.checks.push(expression.to_string());
        self
    }

    /// Adds a foreign key from `column` to `on(references)`.
    ///
    /// Arguments are the local column, then the referenced table, then the
    /// referenced column: `foreign("user_id", "users", "id")` renders
    /// `FOREIGN KEY (user_id) REFERENCES users(id)`. Both referential actions
    /// default to CASCADE.
    pub fn foreign(&mut self, column: &str, on: &str, references: &str) -> ForeignKeyDefinition<'_> {
        self.foreign_keys.push(ForeignKey {
            column: column.to_string(),
            on: on.to_string(),
            references: references.to_string(),
            on_delete: ForeignKeyAction::Cascade,
            on_update: ForeignKeyAction::Cascade,
        });
        let index = self.foreign_keys.len() - 1;
        ForeignKeyDefinition {
            blueprint: self,
            index,
        }
    }

    // Alterations

    /// `DROP COLUMN column`
    pub fn drop_column(&mut self, column: &str) -> &mut Self {
        self.entries.push(Entry::DropColumn(column.to_string()));
        self
    }

    /// `RENAME COLUMN from TO to`
    pub fn rename_column(&mut self, from: &str, to: &str) -> &mut Self {
        self.entries.push(Entry::RenameColumn {
            from: from.to_string(),
            to: to.to_string(),
        });
        self
    }

    /// Redefines `column` with the last column the callback declares.
    ///
    /// Renders `MODIFY COLUMN <definition>`, or `CHANGE COLUMN <column>
    /// <definition>` when the new definition carries a different name.
    /// Constraints declared in the callback are added to this blueprint. A
    /// callback that declares no column adds no column entry.
    pub fn change_column<F>(&mut self, column: &str, define: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let mut scratch = Self::new(self.table.clone());
        define(&mut scratch);

        if let Some(definition) = scratch.columns.pop() {
            self.entries.push(Entry::ChangeColumn {
                name: column.to_string(),
                definition,
            });
        }
        self.primary_keys.append(&mut scratch.primary_keys);
        self.unique_keys.append(&mut scratch.unique_keys);
        self.indexes.append(&mut scratch.indexes);
        self.foreign_keys.append(&mut scratch.foreign_keys);
        self.checks.append(&mut scratch.checks);
        self
    }

    /// `RENAME TO new_name`
    pub fn rename_table(&mut self, new_name: &str) -> &mut Self {
        self.entries.push(Entry::RenameTable(new_name.to_string()));
        self
    }

    // Compilation

    fn constraint_clauses(&self, prefix: &str) -> Vec<String> {
        let mut clauses = vec![];

        if !self.primary_keys.is_empty() {
            clauses.push(format!(
                "{prefix}PRIMARY KEY ({})",
                self.primary_keys.join(", ")
            ));
        }
        for column in &self.unique_keys {
            clauses.push(format!("{prefix}UNIQUE ({column})"));
        }
        for column in &self.indexes {
            clauses.push(format!("{prefix}INDEX ({column})"));
        }
        for foreign_key in &self.foreign_keys {
            clauses.push(format!("{prefix}{}", foreign_key.to_sql()));
        }
        for check in &self.checks {
            clauses.push(format!("{prefix}CHECK ({check})"));
        }

        clauses
    }

    /// Renders `CREATE TABLE t (columns, primary, unique, index, foreign, check)`.
    ///
    /// Fails with [`LayerError::TableNotSet`] for a blank table name and
    /// [`LayerError::EmptyBlueprint`] when no column was declared.
    pub fn to_sql(self) -> Result<String> {
        let table = rules::validate_table(Some(self.table.as_str()))?;
        if !self.has_columns() {
            return Err(LayerError::EmptyBlueprint(table.to_string()));
        }

        let mut parts: Vec<String> = self
            .entries
            .iter()
            .map(|e| e.create_sql(&self.columns))
            .collect();
        parts.extend(self.constraint_clauses(""));
        Ok(format!("CREATE TABLE {table} ({})", parts.join(", ")))
    }

    /// Renders `ALTER TABLE t ...`, adding new columns with `ADD COLUMN` and
    /// new constraints with `ADD`.
    ///
    /// Fails with [`LayerError::TableNotSet`] for a blank table name and
    /// [`LayerError::EmptyBlueprint`] when nothing was declared.
    pub fn to_alter_sql(self) -> Result<String> {
        let table = rules::validate_table(Some(self.table.as_str()))?;
        if self.is_empty() {
            return Err(LayerError::EmptyBlueprint(table.to_string()));
        }

        let mut parts: Vec<String> = self
            .entries
            .iter()
            .map(|e| e.alter_sql(&self.columns))
            .collect();
        parts.extend(self.constraint_clauses("ADD "));
        Ok(format!("ALTER TABLE {table} {}", parts.join(", ")))
    }
}

/// Handle to the column just declared.
#[derive(Debug)]
pub struct ColumnDefinition<'a> {
    blueprint: &'a mut Blueprint,
    index: usize,
}

impl ColumnDefinition<'_> {
    fn column(&mut self) -> &mut Column {
        &mut self.blueprint.columns[self.index]
    }

    fn modify(mut self, modifier: Modifier) -> Self {
        self.column().modifiers.push(modifier);
        self
    }

    /// The column name.
    pub fn name(&self) -> &str {
        &self.blueprint.columns[self.index].name
    }

    /// `NULL`
    pub fn nullable(self) -> Self {
        self.modify(Modifier::Nullable)
    }

    /// `NOT NULL`
    pub fn not_nullable(self) -> Self {
        self.modify(Modifier::NotNullable)
    }

    /// `DEFAULT <value>`
    pub fn default(self, value: impl Into<DefaultValue>) -> Self {
        self.modify(Modifier::Default(value.into()))
    }

    /// `DEFAULT <expr>` with a raw SQL expression.
    pub fn default_expr(self, expr: impl Into<String>) -> Self {
        self.modify(Modifier::Default(DefaultValue::Expression(expr.into())))
    }

    /// `ON UPDATE <expr>`
    pub fn on_update_expr(self, expr: impl Into<String>) -> Self {
        self.modify(Modifier::OnUpdate(expr.into()))
    }

    /// `UNSIGNED`
    pub fn unsigned(self) -> Self {
        self.modify(Modifier::Unsigned)
    }

    /// `AFTER <column>`
    pub fn after(self, column: impl Into<String>) -> Self {
        self.modify(Modifier::After(column.into()))
    }

    /// `COMMENT '<text>'`
    pub fn comment(self, text: impl Into<String>) -> Self {
        self.modify(Modifier::Comment(text.into()))
    }

    /// `FIRST`
    pub fn first(self) -> Self {
        self.modify(Modifier::First)
    }

    /// Adds a `UNIQUE (column)` clause for this column.
    pub fn unique(mut self) -> Self {
        let name = self.name().to_string();
        self.blueprint.unique_keys.push(name);
        self
    }

    /// Adds an `INDEX (column)` clause for this column.
    pub fn index(mut self) -> Self {
        let name = self.name().to_string();
        self.blueprint.indexes.push(name);
        self
    }

    /// Adds this column to the PRIMARY KEY clause.
    pub fn primary(mut self) -> Self {
        let name = self.name().to_string();
        self.blueprint.primary_keys.push(name);
        self
    }
}

/// Handle to the foreign key just declared.
#[derive(Debug)]
pub struct ForeignKeyDefinition<'a> {
    blueprint: &'a mut Blueprint,
    index: usize,
}

impl ForeignKeyDefinition<'_> {
    /// Sets the ON DELETE action.
    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.blueprint.foreign_keys[self.index].on_delete = action;
        self
    }

    /// Sets the ON UPDATE action.
    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.blueprint.foreign_keys[self.index].on_update = action;
        self
    }
}
