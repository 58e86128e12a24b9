//! Pooled MySQL connections and transactions.

use std::fmt;

use layers_core::{Statement, StatementKind};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::MySql;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::executor::{ExecResult, Executor, Row};
use crate::migration::Migration;
use crate::query;

/// A MySQL connection pool.
///
/// Cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct Connection {
    pool: MySqlPool,
}

impl Connection {
    /// Opens a pool for `config`.
    ///
    /// With `persistent` set, one connection is kept open and never reaped
    /// for idleness.
    pub async fn connect(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut options = MySqlPoolOptions::new();
        if config.persistent {
            options = options.min_connections(1).idle_timeout(None);
        }
        let pool = options.connect_with(config.connect_options()).await?;

        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Connected to MySQL"
        );
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    #[must_use]
    pub const fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Starts a transaction on one pooled connection.
    pub async fn begin(&self) -> Result<Transaction> {
        let inner = self.pool.begin().await?;
        info!("Transaction started");
        Ok(Transaction {
            inner: Mutex::new(inner),
        })
    }

    /// Runs the migration's `up` statements in a transaction.
    ///
    /// MySQL commits DDL implicitly, so a failure part way leaves the
    /// statements before it applied.
    pub async fn migrate<M: Migration + ?Sized>(&self, migration: &M) -> Result<()> {
        info!(name = %migration.name(), "Applying migration");
        self.run_schema(migration.up()?).await?;
        info!(name = %migration.name(), "Migration applied successfully");
        Ok(())
    }

    /// Runs the migration's `down` statements in a transaction.
    pub async fn rollback<M: Migration + ?Sized>(&self, migration: &M) -> Result<()> {
        info!(name = %migration.name(), "Rolling back migration");
        self.run_schema(migration.down()?).await?;
        info!(name = %migration.name(), "Migration rolled back successfully");
        Ok(())
    }

    async fn run_schema(&self, statements: Vec<String>) -> Result<()> {
        let tx = self.begin().await?;
        for sql in statements {
            tx.execute(&Statement::new(StatementKind::Schema, sql, vec![]))
                .await?;
        }
        tx.commit().await
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Connection pool closed");
    }
}

impl Executor for Connection {
    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Row>> {
        query::fetch_all(&self.pool, statement).await
    }

    async fn fetch_optional(&self, statement: &Statement) -> Result<Option<Row>> {
        query::fetch_optional(&self.pool, statement).await
    }

    async fn execute(&self, statement: &Statement) -> Result<ExecResult> {
        query::execute(&self.pool, statement).await
    }

    async fn fetch_scalar(&self, statement: &Statement) -> Result<i64> {
        query::fetch_scalar(&self.pool, statement).await
    }
}

/// A transaction holding one pooled connection.
///
/// Dropping it without [`commit`](Self::commit) rolls it back.
pub struct Transaction {
    inner: Mutex<sqlx::Transaction<'static, MySql>>,
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction").finish_non_exhaustive()
    }
}

impl Transaction {
    /// Commits the transaction.
    pub async fn commit(self) -> Result<()> {
        self.inner.into_inner().commit().await?;
        info!("Transaction committed");
        Ok(())
    }

    /// Rolls the transaction back.
    pub async fn rollback(self) -> Result<()> {
        self.inner.into_inner().rollback().await?;
        warn!("Transaction rolled back");
        Ok(())
    }
}

impl Executor for Transaction {
    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Row>> {
        let mut tx = self.inner.lock().await;
        query::fetch_all(&mut **tx, statement).await
    }

    async fn fetch_optional(&self, statement: &Statement) -> Result<Option<Row>> {
        let mut tx = self.inner.lock().await;
        query::fetch_optional(&mut **tx, statement).await
    }

    async fn execute(&self, statement: &Statement) -> Result<ExecResult> {
        let mut tx = self.inner.lock().await;
        query::execute(&mut **tx, statement).await
    }

    async fn fetch_scalar(&self, statement: &Statement) -> Result<i64> {
        let mut tx = self.inner.lock().await;
        query::fetch_scalar(&mut **tx, statement).await
    }
}
