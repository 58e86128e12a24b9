#![allow(dead_code)]

use std::sync::Mutex;

use layers_mysql::{ExecResult, Executor, Result, Row, SqlValue, Statement};

/// An executor that records statements and answers with canned results.
#[derive(Debug, Default)]
pub struct Recorder {
    statements: Mutex<Vec<Statement>>,
    rows: Vec<Row>,
    scalar: i64,
    result: ExecResult,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_scalar(mut self, scalar: i64) -> Self {
        self.scalar = scalar;
        self
    }

    pub fn with_result(mut self, rows_affected: u64, last_insert_id: u64) -> Self {
        self.result = ExecResult {
            rows_affected,
            last_insert_id,
        };
        self
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }

    pub fn last(&self) -> Statement {
        self.statements()
            .pop()
            .expect("no statement was dispatched")
    }

    fn record(&self, statement: &Statement) {
        self.statements.lock().unwrap().push(statement.clone());
    }
}

impl Executor for Recorder {
    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Row>> {
        self.record(statement);
        Ok(self.rows.clone())
    }

    async fn fetch_optional(&self, statement: &Statement) -> Result<Option<Row>> {
        self.record(statement);
        Ok(self.rows.first().cloned())
    }

    async fn execute(&self, statement: &Statement) -> Result<ExecResult> {
        self.record(statement);
        Ok(self.result)
    }

    async fn fetch_scalar(&self, statement: &Statement) -> Result<i64> {
        self.record(statement);
        Ok(self.scalar)
    }
}

pub fn row(pairs: &[(&str, SqlValue)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}
