//! # layers-mysql
//!
//! Runs [`layers_core`] statements on MySQL through sqlx.
//!
//! This crate provides:
//! - `Config` loaded from serde sources or `DB_*` environment variables
//! - `Connection` (a pool) and `Transaction`, both implementing `Executor`
//! - `Table` for validated one-call CRUD against a table
//! - `Model` for record-level helpers keyed by a derived primary key
//! - `Migration` for reversible DDL
//!
//! ## Quick Start
//!
//! ```ignore
//! use layers_mysql::{Condition, Config, Connection, Executor, FieldMap};
//!
//! async fn example() -> layers_mysql::Result<()> {
//!     let db = Connection::connect(&Config::from_env()?).await?;
//!
//!     let id = db
//!         .table("users")
//!         .insert_get_id(FieldMap::new().set("name", "Alice"))
//!         .await?;
//!
//!     let rows = db
//!         .table("users")
//!         .select(Condition::new("user_id = ?").bind(id))
//!         .await?;
//!
//!     let tx = db.begin().await?;
//!     tx.table("users").delete(Condition::new("user_id = ?").bind(id)).await?;
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```
//!
//! Validation failures are returned before anything is sent. Database
//! failures come back unchanged as [`Error::Execution`].

pub mod config;
pub mod connection;
pub mod error;
pub mod executor;
pub mod migration;
pub mod model;
mod query;
pub mod table;

pub use config::Config;
pub use connection::{Connection, Transaction};
pub use error::{Error, Result};
pub use executor::{ExecResult, Executor, Row};
pub use migration::Migration;
pub use model::{Model, Saved};
pub use table::Table;

pub use layers_core::{
    Condition, FieldMap, Inflector, Language, Layer, LayerError, Schema, SelectOptions,
    SqlValue, Statement, StatementKind, ToSqlValue,
};
