//! Active-record style access to one table.
//!
//! A model is a marker type naming its table, the columns callers may write,
//! and the language its table name is written in. The primary key column is
//! derived from the table name (`contas` gives `conta_id`) unless
//! [`Model::primary_key`] is overridden.
//!
//! ```ignore
//! use layers_mysql::{Connection, FieldMap, Model};
//!
//! struct Conta;
//!
//! impl Model for Conta {
//!     const TABLE: &'static str = "contas";
//!     const FILLABLE: &'static [&'static str] = &["titular", "saldo"];
//! }
//!
//! async fn example(db: &Connection) -> layers_mysql::Result<()> {
//!     let id = Conta::create_get_id(db, FieldMap::new().set("titular", "Ana")).await?;
//!     let conta = Conta::find(db, id).await?;
//!     Ok(())
//! }
//! ```

use layers_core::{Condition, FieldMap, Inflector, Language, SelectOptions, ToSqlValue};

use crate::error::Result;
use crate::executor::{Executor, Row};

/// What [`Model::save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    /// A new row was inserted with this id.
    Created(u64),
    /// An existing row was updated; holds the rows affected.
    Updated(u64),
}

/// A table with fixed metadata and record-level helpers.
#[allow(async_fn_in_trait)]
pub trait Model {
    /// Table name.
    const TABLE: &'static str;

    /// Columns that `create`, `update` and `save` may write. Others are
    /// dropped silently.
    const FILLABLE: &'static [&'static str] = &[];

    /// Language of the table name, used to derive the primary key.
    const LANGUAGE: Language = Language::Pt;

    /// The primary key column.
    fn primary_key() -> String {
        Inflector::id_column(Self::TABLE, Self::LANGUAGE)
    }

    /// Keeps only the fillable attributes.
    fn fillable(mut attributes: FieldMap) -> FieldMap {
        attributes.retain_columns(Self::FILLABLE);
        attributes
    }

    /// `WHERE <primary key> = ?` for `id`.
    fn by_key<T: ToSqlValue>(id: T) -> Condition {
        Condition::new(format!("{} = ?", Self::primary_key())).bind(id)
    }

    /// Every row.
    async fn all<E: Executor>(db: &E) -> Result<Vec<Row>> {
        db.table(Self::TABLE).select("1").await
    }

    /// The row with primary key `id`.
    async fn find<E: Executor, T: ToSqlValue>(db: &E, id: T) -> Result<Option<Row>> {
        db.table(Self::TABLE).first(Self::by_key(id)).await
    }

    /// Inserts the fillable attributes, returning the rows inserted.
    async fn create<E: Executor>(db: &E, attributes: FieldMap) -> Result<u64> {
        db.table(Self::TABLE)
            .insert(Self::fillable(attributes))
            .await
    }

    /// Inserts the fillable attributes, returning the new id.
    async fn create_get_id<E: Executor>(db: &E, attributes: FieldMap) -> Result<u64> {
        db.table(Self::TABLE)
            .insert_get_id(Self::fillable(attributes))
            .await
    }

    /// Updates the row with primary key `id`.
    async fn update<E: Executor, T: ToSqlValue>(
        db: &E,
        attributes: FieldMap,
        id: T,
    ) -> Result<u64> {
        db.table(Self::TABLE)
            .update(Self::fillable(attributes), Self::by_key(id))
            .await
    }

    /// Deletes the row with primary key `id`.
    async fn delete<E: Executor, T: ToSqlValue>(db: &E, id: T) -> Result<u64> {
        db.table(Self::TABLE).delete(Self::by_key(id)).await
    }

    /// Updates when `attributes` carries the primary key, inserts otherwise.
    async fn save<E: Executor>(db: &E, mut attributes: FieldMap) -> Result<Saved> {
        match attributes.remove(&Self::primary_key()) {
            Some(id) => Ok(Saved::Updated(Self::update(db, attributes, id).await?)),
            None => Ok(Saved::Created(Self::create_get_id(db, attributes).await?)),
        }
    }

    /// Rows matching `condition`.
    async fn filter<E: Executor>(db: &E, condition: impl Into<Condition>) -> Result<Vec<Row>> {
        db.table(Self::TABLE).select(condition).await
    }

    /// Rows matching `condition`, or every row when it is absent or blank.
    async fn find_all<E: Executor>(db: &E, condition: Option<Condition>) -> Result<Vec<Row>> {
        let condition = condition
            .filter(|c| !c.is_blank())
            .unwrap_or_else(|| Condition::new("1"));
        db.table(Self::TABLE).select(condition).await
    }

    /// Number of rows.
    async fn count<E: Executor>(db: &E) -> Result<i64> {
        db.table(Self::TABLE).count(None).await
    }

    /// The first row the server returns.
    async fn first<E: Executor>(db: &E) -> Result<Option<Row>> {
        db.table(Self::TABLE).first("1").await
    }

    /// The row with the highest primary key.
    async fn last<E: Executor>(db: &E) -> Result<Option<Row>> {
        let options = SelectOptions::new()
            .order_by(format!("{} DESC", Self::primary_key()))
            .limit(1);
        let rows = db.table(Self::TABLE).select_with("1", &options).await?;
        Ok(rows.into_iter().next())
    }

    /// Deletes rows matching `condition`.
    async fn delete_where<E: Executor>(db: &E, condition: impl Into<Condition>) -> Result<u64> {
        db.table(Self::TABLE).delete(condition).await
    }

    /// Removes every row.
    async fn truncate<E: Executor>(db: &E) -> Result<()> {
        db.table(Self::TABLE).truncate().await
    }

    /// Returns whether any row matches `condition`.
    async fn exists<E: Executor>(db: &E, condition: impl Into<Condition>) -> Result<bool> {
        db.table(Self::TABLE).exists(condition).await
    }
}
