//! Test support: a scripted executor double.
//!
//! [`ScriptedExecutor`] replays a queue of canned outcomes and records every
//! statement it receives, so tests can pin both the generated SQL and the
//! translation of results into rows and errors without a database.

use std::cell::RefCell;
use std::collections::VecDeque;

use sea_query::Value;

use crate::error::RowError;
use crate::executor::{QueryOutcome, RowExecutor};
use crate::row::Row;

/// A [`RowExecutor`] that replays queued outcomes
///
/// Outcomes are consumed in FIFO order, one per `query` call. An exhausted
/// queue reports a backend error, which makes a miscounted script fail
/// loudly.
///
/// Single-threaded by design (interior mutability via `RefCell`).
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    outcomes: RefCell<VecDeque<Result<QueryOutcome, String>>>,
    calls: RefCell<Vec<(String, Vec<Value>)>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome.
    pub fn expect(self, outcome: QueryOutcome) -> Self {
        self.outcomes.borrow_mut().push_back(Ok(outcome));
        self
    }

    /// Queue a row-producing outcome; the count equals the number of rows.
    pub fn expect_rows(self, rows: Vec<Row>) -> Self {
        self.expect(QueryOutcome::from_rows(rows))
    }

    /// Queue a row-less outcome carrying only a count.
    pub fn expect_count(self, row_count: u64) -> Self {
        self.expect(QueryOutcome::from_count(row_count))
    }

    /// Queue a backend failure.
    pub fn expect_error(self, message: &str) -> Self {
        self.outcomes.borrow_mut().push_back(Err(message.to_string()));
        self
    }

    /// Every `(sql, params)` pair received so far, in call order.
    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.borrow().clone()
    }

    /// Outcomes still queued.
    pub fn remaining(&self) -> usize {
        self.outcomes.borrow().len()
    }
}

impl RowExecutor for ScriptedExecutor {
    fn query(&self, sql: &str, params: &[Value]) -> Result<QueryOutcome, RowError> {
        self.calls.borrow_mut().push((sql.to_string(), params.to_vec()));
        match self.outcomes.borrow_mut().pop_front() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(message)) => Err(RowError::backend(message)),
            None => Err(RowError::backend(format!(
                "scripted executor exhausted at statement: {sql}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_replay_in_order() {
        let executor = ScriptedExecutor::new()
            .expect_rows(vec![Row::new().with("id", 1)])
            .expect_count(2);
        assert_eq!(executor.remaining(), 2);

        let first = executor.query("SELECT 1", &[]).unwrap();
        assert_eq!(first.rows.len(), 1);
        let second = executor.query("SELECT 2", &[]).unwrap();
        assert_eq!(second.row_count, 2);
        assert_eq!(executor.remaining(), 0);
    }

    #[test]
    fn test_calls_are_recorded() {
        let executor = ScriptedExecutor::new().expect_count(0);
        executor.query("DELETE FROM t WHERE id = $1", &[Value::Int(Some(1))]).unwrap();
        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "DELETE FROM t WHERE id = $1");
        assert_eq!(calls[0].1, vec![Value::Int(Some(1))]);
    }

    #[test]
    fn test_exhausted_queue_reports_backend_error() {
        let executor = ScriptedExecutor::new();
        let err = executor.query("SELECT 1", &[]).unwrap_err();
        assert!(err.to_string().contains("exhausted"));
    }
}
