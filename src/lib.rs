//! # rowkey
//!
//! Key-based row access helpers over an injected SQL query function.
//!
//! A convenience layer over a relational database client: existence checks,
//! keyed lookups, and INSERT/UPDATE/DELETE with `RETURNING` projection, each
//! translated into one parameterized statement and executed through a
//! caller-supplied [`RowExecutor`]. Not a database engine, ORM, or query
//! planner.
//!
//! ```
//! use rowkey::{columns, create_row, find_by_primary_key, QueryOutcome, Row, RowError,
//!              SelectOptions, Value};
//!
//! // the executor is any query function: a pooled connection, a transaction
//! // handle, or a closure
//! let query = |_sql: &str, _params: &[Value]| -> Result<QueryOutcome, RowError> {
//!     Ok(QueryOutcome::from_rows(vec![
//!         Row::new().with("id", 3).with("name", "Ann"),
//!     ]))
//! };
//!
//! let row = create_row(&query, "users", &columns! { "name" => "Ann" }, None)?;
//! assert_eq!(row.try_get::<i32>("id").unwrap(), 3);
//!
//! let row = find_by_primary_key(&query, "users", &columns! { "id" => 3 },
//!                               &SelectOptions::new())?;
//! assert_eq!(row.try_get::<String>("name").unwrap(), "Ann");
//! # Ok::<(), RowError>(())
//! ```

pub mod access;
pub mod error;
pub mod executor;
pub mod key;
mod macros;
pub mod row;
mod sql;
pub mod test_helpers;

pub use access::{
    check_foreign_key, check_primary_key, check_unique_key, create_row, delete_row,
    find_by_primary_key, find_by_unique_key, update_row, SelectOptions,
};
pub use error::RowError;
pub use executor::{QueryOutcome, RowExecutor};
pub use key::ColumnValues;
pub use row::{Row, ValueExtractError, ValueType};

pub use sea_query::Value;
