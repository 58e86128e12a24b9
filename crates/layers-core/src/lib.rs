//! # layers-core
//!
//! A small MySQL statement compiler.
//!
//! This crate provides:
//! - A table-bound compiler producing parameterized DML plus its ordered bindings
//! - Validation that runs before compilation and aborts on malformed input
//! - A fluent blueprint for CREATE/ALTER TABLE statements
//! - An inflector deriving `<singular>_id` column names from table names
//!
//! Nothing here performs I/O. Every function is deterministic, and no state is
//! shared between calls, so any number of callers may compile concurrently.
//!
//! ## Statements and bindings
//!
//! ```rust
//! use layers_core::{Condition, FieldMap, Layer, SqlValue};
//!
//! let (sql, bindings) = Layer::table("users")
//!     .insert(FieldMap::new().set("name", "Alice").set("email", "alice@example.com"))
//!     .unwrap()
//!     .into_parts();
//!
//! assert_eq!(sql, "INSERT INTO users (name, email) VALUES (?, ?)");
//! assert_eq!(bindings[0], SqlValue::Text("Alice".into()));
//! ```
//!
//! Only values are parameterized. Table and column names are written into
//! the SQL as given and must come from trusted code, never from user input.

pub mod error;
pub mod fields;
pub mod grammar;
pub mod inflector;
pub mod layer;
pub mod rules;
pub mod schema;
pub mod statement;
pub mod value;

pub use error::{LayerError, Result};
pub use fields::FieldMap;
pub use grammar::{MySqlGrammar, SelectOptions};
pub use inflector::{Inflector, Language};
pub use layer::Layer;
pub use schema::{Blueprint, Schema};
pub use statement::{Condition, Statement, StatementKind};
pub use value::{SqlValue, ToSqlValue};
