//! Reversible schema changes.

use layers_core::Result;

/// A schema change with its inverse, as DDL statements.
///
/// Build the statements with [`Schema`](layers_core::Schema) and run them
/// with [`Connection::migrate`](crate::Connection::migrate) and
/// [`Connection::rollback`](crate::Connection::rollback).
///
/// ```rust
/// use layers_mysql::{Migration, Schema};
///
/// struct CreateUsers;
///
/// impl Migration for CreateUsers {
///     fn name(&self) -> &str {
///         "create_users"
///     }
///
///     fn up(&self) -> layers_core::Result<Vec<String>> {
///         Ok(vec![Schema::create("users", |t| {
///             t.increments("user_id");
///             t.string("email", 255).not_nullable().unique();
///             t.timestamps();
///         })?])
///     }
///
///     fn down(&self) -> layers_core::Result<Vec<String>> {
///         Ok(vec![Schema::drop_if_exists("users")?])
///     }
/// }
///
/// assert_eq!(CreateUsers.down().unwrap(), vec!["DROP TABLE IF EXISTS users"]);
/// ```
pub trait Migration {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Statements that apply the change, in order.
    fn up(&self) -> Result<Vec<String>>;

    /// Statements that undo [`up`](Self::up), in order.
    fn down(&self) -> Result<Vec<String>>;
}
