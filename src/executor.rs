//! The injected query abstraction.
//!
//! Every helper in this crate executes through a caller-supplied
//! [`RowExecutor`]: a pooled connection, an active transaction handle, or a
//! plain closure. Passing the same transaction-bound executor to a sequence
//! of calls is how callers scope those calls to one transaction; this crate
//! performs no pooling, locking, or retry of its own.

use sea_query::Value;

use crate::error::RowError;
use crate::row::Row;

/// Result of executing one statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutcome {
    /// Rows produced by a SELECT or a `RETURNING` clause
    pub rows: Vec<Row>,
    /// Number of rows matched or affected
    pub row_count: u64,
}

impl QueryOutcome {
    /// An outcome with no rows and a zero count.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An outcome whose count equals the number of rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let row_count = rows.len() as u64;
        Self { rows, row_count }
    }

    /// A row-less outcome carrying only a count.
    pub fn from_count(row_count: u64) -> Self {
        Self { rows: Vec::new(), row_count }
    }

    /// Consume the outcome, yielding its first row if any.
    pub fn into_first_row(self) -> Option<Row> {
        self.rows.into_iter().next()
    }
}

/// Trait for executing parameterized SQL statements
///
/// Implementations translate `params` into driver bind values and report the
/// produced rows and row count. Any driver failure should be wrapped with
/// [`RowError::backend`]; the helpers pass it through untranslated.
///
/// A closure with the matching signature implements the trait directly:
///
/// ```
/// use rowkey::{QueryOutcome, RowError, RowExecutor, Value};
///
/// let query = |sql: &str, _params: &[Value]| -> Result<QueryOutcome, RowError> {
///     assert!(sql.starts_with("SELECT"));
///     Ok(QueryOutcome::empty())
/// };
/// let outcome = query.query("SELECT 1", &[])?;
/// assert_eq!(outcome.row_count, 0);
/// # Ok::<(), RowError>(())
/// ```
pub trait RowExecutor {
    /// Execute one SQL statement with positional parameters (`$1`, `$2`, ...).
    ///
    /// # Errors
    ///
    /// Returns whatever the backend reported, wrapped in
    /// [`RowError::Backend`].
    fn query(&self, sql: &str, params: &[Value]) -> Result<QueryOutcome, RowError>;
}

impl<F> RowExecutor for F
where
    F: Fn(&str, &[Value]) -> Result<QueryOutcome, RowError>,
{
    fn query(&self, sql: &str, params: &[Value]) -> Result<QueryOutcome, RowError> {
        self(sql, params)
    }
}
