//! Table-bound operations that compile, validate and run in one call.

use layers_core::{Condition, FieldMap, Layer, SelectOptions};

use crate::error::Result;
use crate::executor::{Executor, Row};

/// Runs [`Layer`] statements against one table.
///
/// Every call compiles first. A statement that fails validation is never
/// sent.
#[derive(Debug)]
pub struct Table<'a, E> {
    executor: &'a E,
    layer: Layer,
}

impl<'a, E: Executor> Table<'a, E> {
    /// Binds `name` on `executor`.
    pub fn new(executor: &'a E, name: &str) -> Self {
        Self {
            executor,
            layer: Layer::table(name),
        }
    }

    /// The statement compiler for this table.
    #[must_use]
    pub const fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Inserts one row, returning the number of rows inserted.
    pub async fn insert(&self, fields: FieldMap) -> Result<u64> {
        let statement = self.layer.insert(fields)?;
        Ok(self.executor.execute(&statement).await?.rows_affected)
    }

    /// Inserts one row, returning its generated id.
    pub async fn insert_get_id(&self, fields: FieldMap) -> Result<u64> {
        let statement = self.layer.insert(fields)?;
        Ok(self.executor.execute(&statement).await?.last_insert_id)
    }

    /// Inserts several rows, one statement each, returning the total number
    /// of rows inserted.
    ///
    /// Every row is validated before the first statement is sent, so one bad
    /// row means nothing is written. Run it on a [`Transaction`](crate::Transaction)
    /// to make the inserts atomic.
    pub async fn insert_many(&self, rows: Vec<FieldMap>) -> Result<u64> {
        let statements = rows
            .into_iter()
            .map(|fields| self.layer.insert(fields))
            .collect::<layers_core::Result<Vec<_>>>()?;

        let mut inserted = 0;
        for statement in &statements {
            inserted += self.executor.execute(statement).await?.rows_affected;
        }
        Ok(inserted)
    }

    /// `SELECT * ... WHERE condition`
    pub async fn select(&self, condition: impl Into<Condition>) -> Result<Vec<Row>> {
        let statement = self.layer.select(condition)?;
        self.executor.fetch_all(&statement).await
    }

    /// `SELECT *` with GROUP BY / ORDER BY / LIMIT.
    pub async fn select_with(
        &self,
        condition: impl Into<Condition>,
        options: &SelectOptions,
    ) -> Result<Vec<Row>> {
        let statement = self.layer.select_with(condition, options)?;
        self.executor.fetch_all(&statement).await
    }

    /// The first row matching `condition`.
    pub async fn first(&self, condition: impl Into<Condition>) -> Result<Option<Row>> {
        let statement = self
            .layer
            .select_with(condition, &SelectOptions::new().limit(1))?;
        self.executor.fetch_optional(&statement).await
    }

    /// `SELECT fields`, optionally filtered.
    pub async fn fields(&self, fields: &str, condition: Option<Condition>) -> Result<Vec<Row>> {
        let statement = self.layer.select_fields(fields, condition)?;
        self.executor.fetch_all(&statement).await
    }

    /// Updates matching rows, returning how many changed.
    pub async fn update(
        &self,
        fields: FieldMap,
        condition: impl Into<Condition>,
    ) -> Result<u64> {
        let statement = self.layer.update(fields, condition)?;
        Ok(self.executor.execute(&statement).await?.rows_affected)
    }

    /// Deletes matching rows, returning how many were removed.
    pub async fn delete(&self, condition: impl Into<Condition>) -> Result<u64> {
        let statement = self.layer.delete(condition)?;
        Ok(self.executor.execute(&statement).await?.rows_affected)
    }

    /// Counts rows, optionally filtered.
    pub async fn count(&self, condition: Option<Condition>) -> Result<i64> {
        let statement = self.layer.count(condition)?;
        self.executor.fetch_scalar(&statement).await
    }

    /// Returns whether any row matches `condition`.
    pub async fn exists(&self, condition: impl Into<Condition>) -> Result<bool> {
        let statement = self.layer.exists(condition)?;
        Ok(self.executor.fetch_scalar(&statement).await? != 0)
    }

    /// Removes every row.
    pub async fn truncate(&self) -> Result<()> {
        let statement = self.layer.truncate()?;
        self.executor.execute(&statement).await?;
        Ok(())
    }
}
