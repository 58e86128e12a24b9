//! sqlx plumbing shared by connections and transactions.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use layers_core::{SqlValue, Statement};
use sqlx::mysql::{MySqlArguments, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, MySql, Row as _};
use tracing::debug;

use crate::error::Result;
use crate::executor::{ExecResult, Row};

pub(crate) async fn fetch_all<'c, E>(executor: E, statement: &Statement) -> Result<Vec<Row>>
where
    E: sqlx::Executor<'c, Database = MySql>,
{
    log_statement(statement);
    let rows = build(statement).fetch_all(executor).await?;
    rows.iter().map(decode_row).collect()
}

pub(crate) async fn fetch_optional<'c, E>(
    executor: E,
    statement: &Statement,
) -> Result<Option<Row>>
where
    E: sqlx::Executor<'c, Database = MySql>,
{
    log_statement(statement);
    let row = build(statement).fetch_optional(executor).await?;
    row.as_ref().map(decode_row).transpose()
}

pub(crate) async fn execute<'c, E>(executor: E, statement: &Statement) -> Result<ExecResult>
where
    E: sqlx::Executor<'c, Database = MySql>,
{
    log_statement(statement);
    let done = build(statement).execute(executor).await?;
    Ok(ExecResult {
        rows_affected: done.rows_affected(),
        last_insert_id: done.last_insert_id(),
    })
}

pub(crate) async fn fetch_scalar<'c, E>(executor: E, statement: &Statement) -> Result<i64>
where
    E: sqlx::Executor<'c, Database = MySql>,
{
    log_statement(statement);
    let row = build(statement).fetch_one(executor).await?;
    Ok(row.try_get::<i64, _>(0)?)
}

fn log_statement(statement: &Statement) {
    debug!(
        kind = ?statement.kind(),
        sql = %statement.sql(),
        bindings = statement.bindings().len(),
        "Executing statement"
    );
}

/// Attaches the bindings in placeholder order.
fn build(statement: &Statement) -> Query<'_, MySql, MySqlArguments> {
    statement
        .bindings()
        .iter()
        .cloned()
        .fold(sqlx::query(statement.sql()), bind_param)
}

/// Binds a SqlValue parameter to a query.
fn bind_param(
    query: Query<'_, MySql, MySqlArguments>,
    value: SqlValue,
) -> Query<'_, MySql, MySqlArguments> {
    match value {
        SqlValue::Null => query.bind(Option::<String>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}

fn decode_row(row: &MySqlRow) -> Result<Row> {
    row.columns()
        .iter()
        .map(|column| Ok((column.name().to_string(), decode_value(row, column.ordinal())?)))
        .collect()
}

/// Decodes one column into the closest [`SqlValue`].
///
/// `TINYINT(1)` comes back as `Int`. Temporal types come back as text in
/// MySQL's own format. Types with no native mapping (such as `DECIMAL`) are
/// read as text.
fn decode_value(row: &MySqlRow, index: usize) -> Result<SqlValue> {
    if let Ok(v) = row.try_get::<Option<i64>, _>(index) {
        return Ok(v.map_or(SqlValue::Null, SqlValue::Int));
    }
    if let Ok(v) = row.try_get::<Option<u64>, _>(index) {
        return Ok(v.map_or(SqlValue::Null, |n| {
            i64::try_from(n).map_or_else(|_| SqlValue::Text(n.to_string()), SqlValue::Int)
        }));
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(index) {
        return Ok(v.map_or(SqlValue::Null, SqlValue::Float));
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(index) {
        return Ok(v.map_or(SqlValue::Null, SqlValue::Text));
    }
    if let Ok(v) = row.try_get::<Option<NaiveDateTime>, _>(index) {
        return Ok(v.map_or(SqlValue::Null, |t| {
            SqlValue::Text(t.format("%Y-%m-%d %H:%M:%S").to_string())
        }));
    }
    if let Ok(v) = row.try_get::<Option<NaiveDate>, _>(index) {
        return Ok(v.map_or(SqlValue::Null, |d| {
            SqlValue::Text(d.format("%Y-%m-%d").to_string())
        }));
    }
    if let Ok(v) = row.try_get::<Option<NaiveTime>, _>(index) {
        return Ok(v.map_or(SqlValue::Null, |t| {
            SqlValue::Text(t.format("%H:%M:%S").to_string())
        }));
    }
    if let Ok(v) = row.try_get::<Option<Vec<u8>>, _>(index) {
        return Ok(v.map_or(SqlValue::Null, SqlValue::Blob));
    }

    let text = row.try_get_unchecked::<Option<String>, _>(index)?;
    Ok(text.map_or(SqlValue::Null, SqlValue::Text))
}
