//! Key-based row access operations.
//!
//! Existence checks (`check_primary_key`, `check_unique_key`,
//! `check_foreign_key`), keyed finders (`find_by_primary_key`,
//! `find_by_unique_key`), and mutations (`create_row`, `update_row`,
//! `delete_row`). Every operation is a plain call through a caller-supplied
//! [`RowExecutor`]; transaction scoping belongs to the caller.
//!
//! # Example
//!
//! ```
//! use rowkey::{check_primary_key, columns, QueryOutcome, RowError, Value};
//!
//! // any query function can serve as the executor
//! let query = |_sql: &str, _params: &[Value]| -> Result<QueryOutcome, RowError> {
//!     Ok(QueryOutcome::empty())
//! };
//! check_primary_key(&query, "users", &columns! { "id" => 42 })?;
//! # Ok::<(), RowError>(())
//! ```

use crate::error::RowError;
use crate::executor::{QueryOutcome, RowExecutor};
use crate::key::ColumnValues;
use crate::row::Row;
use crate::sql;

/// Options for keyed lookups
///
/// One structured shape with explicit optional fields: `column_names`
/// restricts the SELECT projection, `for_update` appends a row-locking clause
/// for use inside a transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectOptions {
    /// Restrict the SELECT projection to these columns
    pub column_names: Option<Vec<String>>,
    /// Append `FOR UPDATE` to lock the matched row
    pub for_update: bool,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the projection.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_names = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Lock the matched row.
    pub fn for_update(mut self) -> Self {
        self.for_update = true;
        self
    }
}

/// Key lookup primitive shared by the checks and finders.
///
/// Row semantics (`limit_one`) for single-row lookups; count semantics
/// otherwise, where the caller reads `row_count`. An empty key is unsupported
/// input and is passed to the database unvalidated.
fn select_by_key<E: RowExecutor>(
    executor: &E,
    table: &str,
    key: &ColumnValues,
    options: &SelectOptions,
    limit_one: bool,
) -> Result<QueryOutcome, RowError> {
    let statement = sql::select_by_key(
        table,
        key,
        options.column_names.as_deref(),
        limit_one,
        options.for_update,
    );
    log::trace!("select_by_key: text=({}) values={:?}", statement.text, statement.params);
    executor.query(&statement.text, &statement.params)
}

/// Verify that no row matches the primary key.
///
/// # Errors
///
/// [`RowError::Conflict`] when a matching row exists; executor failures pass
/// through.
pub fn check_primary_key<E: RowExecutor>(
    executor: &E,
    table: &str,
    primary_key: &ColumnValues,
) -> Result<(), RowError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("check_primary_key", table).entered();
    log::debug!("check_primary_key: table={table} key=({})", primary_key.column_list());
    let outcome = select_by_key(executor, table, primary_key, &SelectOptions::default(), true)?;
    if !outcome.rows.is_empty() {
        return Err(RowError::Conflict(format!(
            "table \"{table}\" primary key ({}) value ({}) already exists",
            primary_key.column_list(),
            primary_key.value_list()
        )));
    }
    Ok(())
}

/// Verify that no row matches the unique key.
///
/// # Errors
///
/// [`RowError::Conflict`] when a matching row exists.
pub fn check_unique_key<E: RowExecutor>(
    executor: &E,
    table: &str,
    unique_key: &ColumnValues,
) -> Result<(), RowError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("check_unique_key", table).entered();
    log::debug!("check_unique_key: table={table} key=({})", unique_key.column_list());
    let outcome = select_by_key(executor, table, unique_key, &SelectOptions::default(), true)?;
    if !outcome.rows.is_empty() {
        return Err(RowError::Conflict(format!(
            "table \"{table}\" unique key ({}) value ({}) already exists",
            unique_key.column_list(),
            unique_key.value_list()
        )));
    }
    Ok(())
}

/// Verify that no dependent rows reference the foreign key.
///
/// Uses count semantics: the message reports how many dependent rows exist,
/// singular or plural.
///
/// # Errors
///
/// [`RowError::Conflict`] when the dependent-row count is nonzero.
pub fn check_foreign_key<E: RowExecutor>(
    executor: &E,
    table: &str,
    foreign_key: &ColumnValues,
) -> Result<(), RowError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("check_foreign_key", table).entered();
    log::debug!("check_foreign_key: table={table} key=({})", foreign_key.column_list());
    let outcome = select_by_key(executor, table, foreign_key, &SelectOptions::default(), false)?;
    let count = outcome.row_count;
    if count != 0 {
        let (noun, verb) = if count == 1 { ("row", "exists") } else { ("rows", "exist") };
        return Err(RowError::Conflict(format!(
            "table \"{table}\" foreign key ({}) value ({}): {count} dependent {noun} {verb}",
            foreign_key.column_list(),
            foreign_key.value_list()
        )));
    }
    Ok(())
}

/// Fetch the row matching the primary key.
///
/// # Errors
///
/// [`RowError::NotFound`] when no row matches.
pub fn find_by_primary_key<E: RowExecutor>(
    executor: &E,
    table: &str,
    primary_key: &ColumnValues,
    options: &SelectOptions,
) -> Result<Row, RowError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("find_by_primary_key", table).entered();
    log::debug!("find_by_primary_key: table={table} key=({})", primary_key.column_list());
    let outcome = select_by_key(executor, table, primary_key, options, true)?;
    outcome.into_first_row().ok_or_else(|| {
        RowError::NotFound(format!(
            "table \"{table}\" primary key ({}) value ({}) not found",
            primary_key.column_list(),
            primary_key.value_list()
        ))
    })
}

/// Fetch the row matching the unique key.
///
/// # Errors
///
/// [`RowError::NotFound`] when no row matches.
pub fn find_by_unique_key<E: RowExecutor>(
    executor: &E,
    table: &str,
    unique_key: &ColumnValues,
    options: &SelectOptions,
) -> Result<Row, RowError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("find_by_unique_key", table).entered();
    log::debug!("find_by_unique_key: table={table} key=({})", unique_key.column_list());
    let outcome = select_by_key(executor, table, unique_key, options, true)?;
    outcome.into_first_row().ok_or_else(|| {
        RowError::NotFound(format!(
            "table \"{table}\" unique key ({}) value ({}) not found",
            unique_key.column_list(),
            unique_key.value_list()
        ))
    })
}

/// Insert a row and return it.
///
/// Empty `data` inserts all-default values. `returning` restricts the
/// `RETURNING` projection; `None` returns every column.
///
/// # Errors
///
/// [`RowError::Backend`] if the executor reports a failure or produces no
/// returned row.
pub fn create_row<E: RowExecutor>(
    executor: &E,
    table: &str,
    data: &ColumnValues,
    returning: Option<&[&str]>,
) -> Result<Row, RowError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("create_row", table).entered();
    log::debug!("create_row: table={table} columns=({})", data.column_list());
    let statement = sql::insert(table, data, returning);
    log::trace!("create_row: text=({}) values={:?}", statement.text, statement.params);
    let outcome = executor.query(&statement.text, &statement.params)?;
    outcome
        .into_first_row()
        .ok_or_else(|| RowError::backend(format!("INSERT into \"{table}\" returned no row")))
}

/// Update the row matching the primary key and return it.
///
/// Data values bind before key values, so WHERE placeholders start after all
/// SET placeholders.
///
/// # Errors
///
/// [`RowError::NotFound`] when the key matches no row.
pub fn update_row<E: RowExecutor>(
    executor: &E,
    table: &str,
    primary_key: &ColumnValues,
    data: &ColumnValues,
    returning: Option<&[&str]>,
) -> Result<Row, RowError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("update_row", table).entered();
    log::debug!(
        "update_row: table={table} key=({}) columns=({})",
        primary_key.column_list(),
        data.column_list()
    );
    let statement = sql::update(table, primary_key, data, returning);
    log::trace!("update_row: text=({}) values={:?}", statement.text, statement.params);
    let outcome = executor.query(&statement.text, &statement.params)?;
    outcome.into_first_row().ok_or_else(|| {
        RowError::NotFound(format!(
            "table \"{table}\" primary key ({}) value ({}) not found",
            primary_key.column_list(),
            primary_key.value_list()
        ))
    })
}

/// Delete the row matching the primary key.
///
/// Deleting an absent row is not an error; delete is idempotent.
pub fn delete_row<E: RowExecutor>(
    executor: &E,
    table: &str,
    primary_key: &ColumnValues,
) -> Result<(), RowError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("delete_row", table).entered();
    log::debug!("delete_row: table={table} key=({})", primary_key.column_list());
    let statement = sql::delete(table, primary_key);
    log::trace!("delete_row: text=({}) values={:?}", statement.text, statement.params);
    executor.query(&statement.text, &statement.params)?;
    Ok(())
}
