//! SQLite storage bootstrap, statement building and query execution.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the order store.
//! - Build parameterized statements whose SQL and bindings share one source.
//! - Execute statements behind the `QueryExecutor` seam.
//!
//! # Invariants
//! - Every value reaches SQLite as a named binding, never as SQL text.
//! - Connections returned by `open_*` have `foreign_keys=ON` unless the
//!   caller's config explicitly disables it.

use rust_decimal::Decimal;
use rusqlite::types::Value;
use thiserror::Error;

pub mod executor;
mod open;
pub mod schema;
pub mod statement;

pub use executor::{QueryExecutor, SqlRow, SqliteExecutor};
pub use open::{open_db, open_db_in_memory, open_with_config};
pub use statement::{Insert, IntoSqlValue, Select, Statement};

pub type DbResult<T> = Result<T, DbError>;

/// Store-level failure: the query or statement was rejected, or a result
/// row could not be read.
#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("insert did not produce a generated key")]
    MissingGeneratedKey,
    #[error("result row has no column `{0}`")]
    MissingColumn(String),
    #[error("column `{column}` holds {found}, expected {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("column `{column}` holds invalid decimal `{value}`")]
    InvalidDecimal { column: String, value: String },
    #[error("scope name `{0}` is not a plain identifier")]
    InvalidScopeName(&'static str),
}

/// Encodes a decimal the way price columns store it: exact text.
pub(crate) fn decimal_to_value(value: Decimal) -> Value {
    Value::Text(value.to_string())
}
