//! Table definitions (DDL).
//!
//! A [`Blueprint`] collects columns and constraints through a builder
//! callback and is compiled once into a single statement:
//!
//! ```rust
//! use layers_core::schema::{ForeignKeyAction, Schema};
//!
//! let sql = Schema::create("posts", |table| {
//!     table.increments("id");
//!     table.string("title", 200).not_nullable();
//!     table.integer("user_id").unsigned().index();
//!     table
//!         .foreign("user_id", "users", "id")
//!         .on_delete(ForeignKeyAction::Restrict);
//!     table.timestamps();
//! })
//! .unwrap();
//!
//! assert!(sql.starts_with("CREATE TABLE posts (id INT AUTO_INCREMENT PRIMARY KEY"));
//! ```

mod blueprint;
mod column;

pub use blueprint::{Blueprint, ColumnDefinition, ForeignKey, ForeignKeyDefinition};
pub use column::{Column, ColumnType, DefaultValue, ForeignKeyAction, Modifier};

use crate::error::Result;
use crate::rules;

/// Entry points that build a blueprint and render its DDL.
#[derive(Debug, Clone, Copy, Default)]
pub struct Schema;

impl Schema {
    /// Renders `CREATE TABLE` for the columns the callback declares.
    ///
    /// A blank table name fails with [`LayerError::TableNotSet`](crate::LayerError::TableNotSet) before the
    /// callback runs; a callback that declares no column fails with
    /// [`LayerError::EmptyBlueprint`](crate::LayerError::EmptyBlueprint).
    pub fn create<F>(table: &str, define: F) -> Result<String>
    where
        F: FnOnce(&mut Blueprint),
    {
        let mut blueprint = Blueprint::new(rules::validate_table(Some(table))?);
        define(&mut blueprint);
        blueprint.to_sql()
    }

    /// Renders `ALTER TABLE` for the changes the callback declares.
    ///
    /// A callback that declares nothing fails with
    /// [`LayerError::EmptyBlueprint`](crate::LayerError::EmptyBlueprint).
    pub fn table<F>(table: &str, define: F) -> Result<String>
    where
        F: FnOnce(&mut Blueprint),
    {
        let mut blueprint = Blueprint::new(rules::validate_table(Some(table))?);
        define(&mut blueprint);
        blueprint.to_alter_sql()
    }

    /// `DROP TABLE t`
    pub fn drop(table: &str) -> Result<String> {
        let table = rules::validate_table(Some(table))?;
        Ok(format!("DROP TABLE {table}"))
    }

    /// `DROP TABLE IF EXISTS t`
    pub fn drop_if_exists(table: &str) -> Result<String> {
        let table = rules::validate_table(Some(table))?;
        Ok(format!("DROP TABLE IF EXISTS {table}"))
    }
}
