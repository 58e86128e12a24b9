//! The executor seam between compiled statements and a database.

use indexmap::IndexMap;
use layers_core::{Layer, SqlValue, Statement};

use crate::error::Result;
use crate::table::Table;

/// One result row: column name to value, in select-list order.
pub type Row = IndexMap<String, SqlValue>;

/// Outcome of a statement that returns no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecResult {
    /// Rows inserted, updated or deleted.
    pub rows_affected: u64,
    /// `LAST_INSERT_ID()` after the statement, 0 when none was generated.
    pub last_insert_id: u64,
}

/// Runs compiled statements.
///
/// Implemented by [`Connection`](crate::Connection) and
/// [`Transaction`](crate::Transaction). Failures are returned as they come
/// from the driver; nothing is retried.
#[allow(async_fn_in_trait)]
pub trait Executor {
    /// Runs a statement and returns every row.
    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Row>>;

    /// Runs a statement and returns its first row, if any.
    async fn fetch_optional(&self, statement: &Statement) -> Result<Option<Row>>;

    /// Runs a statement that returns no rows.
    async fn execute(&self, statement: &Statement) -> Result<ExecResult>;

    /// Runs a statement and reads the first column of its single row as an
    /// integer (`COUNT(*)`, `EXISTS`).
    async fn fetch_scalar(&self, statement: &Statement) -> Result<i64>;

    /// Runs caller-written SQL and returns every row.
    async fn raw(&self, sql: &str, bindings: Vec<SqlValue>) -> Result<Vec<Row>> {
        self.fetch_all(&Layer::raw(sql, bindings)).await
    }

    /// Table-bound operations running on this executor.
    fn table(&self, name: &str) -> Table<'_, Self>
    where
        Self: Sized,
    {
        Table::new(self, name)
    }
}
