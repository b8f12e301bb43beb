//! Query execution seam and its SQLite implementation.
//!
//! # Responsibility
//! - Define the minimal execution contract the repository depends on.
//! - Run `Statement`s against a borrowed SQLite connection.
//! - Copy result rows into owned, column-keyed `SqlRow`s.
//!
//! # Invariants
//! - Scopes are SQLite savepoints, so they nest inside a caller transaction.
//! - Scope names are static identifiers; anything else is rejected before
//!   it reaches SQL text.
//! - `query_first` never reads past the first row.

use crate::db::{DbError, DbResult, Statement};
use rust_decimal::Decimal;
use rusqlite::types::{ToSql, Value};
use rusqlite::{Connection, Row};
use std::str::FromStr;

/// Parameterized-SQL execution facility consumed by repositories.
pub trait QueryExecutor {
    /// Runs a write statement and returns the number of changed rows.
    fn execute(&self, statement: &Statement) -> DbResult<usize>;
    /// Runs an insert and returns the key the store generated for it.
    fn insert_returning_key(&self, statement: &Statement) -> DbResult<i64>;
    /// Runs a query and returns every row.
    fn query_rows(&self, statement: &Statement) -> DbResult<Vec<SqlRow>>;
    /// Runs a query and returns only its first row.
    fn query_first(&self, statement: &Statement) -> DbResult<Option<SqlRow>>;
    /// Opens a named atomic scope.
    fn begin_scope(&self, scope: &'static str) -> DbResult<()>;
    /// Makes the scope's writes permanent (or part of the enclosing scope).
    fn commit_scope(&self, scope: &'static str) -> DbResult<()>;
    /// Discards every write made since `begin_scope` and closes the scope.
    fn rollback_scope(&self, scope: &'static str) -> DbResult<()>;
}

/// One result row, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlRow {
    cells: Vec<(String, Value)>,
}

impl SqlRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one cell. Used by executors and test fakes.
    pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
        self.cells.push((column.into(), value));
        self
    }

    pub fn value(&self, column: &str) -> DbResult<&Value> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
            .ok_or_else(|| DbError::MissingColumn(column.to_string()))
    }

    pub fn get_i64(&self, column: &str) -> DbResult<i64> {
        match self.value(column)? {
            Value::Integer(value) => Ok(*value),
            other => Err(type_error(column, "integer", other)),
        }
    }

    pub fn get_u32(&self, column: &str) -> DbResult<u32> {
        let value = self.get_i64(column)?;
        u32::try_from(value).map_err(|_| DbError::ColumnType {
            column: column.to_string(),
            expected: "non-negative 32-bit integer",
            found: "out-of-range integer",
        })
    }

    pub fn get_text(&self, column: &str) -> DbResult<String> {
        match self.value(column)? {
            Value::Text(value) => Ok(value.clone()),
            other => Err(type_error(column, "text", other)),
        }
    }

    /// Reads an exact decimal. Text is the canonical stored form; integer and
    /// real cells are accepted for rows written by other tools.
    pub fn get_decimal(&self, column: &str) -> DbResult<Decimal> {
        let invalid = |value: String| DbError::InvalidDecimal {
            column: column.to_string(),
            value,
        };
        match self.value(column)? {
            Value::Text(text) => Decimal::from_str(text.trim()).map_err(|_| invalid(text.clone())),
            Value::Integer(value) => Ok(Decimal::from(*value)),
            Value::Real(value) => {
                Decimal::try_from(*value).map_err(|_| invalid(value.to_string()))
            }
            other => Err(type_error(column, "decimal", other)),
        }
    }
}

fn type_error(column: &str, expected: &'static str, found: &Value) -> DbError {
    DbError::ColumnType {
        column: column.to_string(),
        expected,
        found: value_kind(found),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Integer(_) => "integer",
        Value::Real(_) => "real",
        Value::Text(_) => "text",
        Value::Blob(_) => "blob",
    }
}

/// SQLite-backed executor over a borrowed connection.
pub struct SqliteExecutor<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteExecutor<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QueryExecutor for SqliteExecutor<'_> {
    fn execute(&self, statement: &Statement) -> DbResult<usize> {
        let mut stmt = self.conn.prepare_cached(statement.sql())?;
        let changed = stmt.execute(named_params(statement).as_slice())?;
        Ok(changed)
    }

    fn insert_returning_key(&self, statement: &Statement) -> DbResult<i64> {
        if self.execute(statement)? == 0 {
            return Err(DbError::MissingGeneratedKey);
        }
        Ok(self.conn.last_insert_rowid())
    }

    fn query_rows(&self, statement: &Statement) -> DbResult<Vec<SqlRow>> {
        let mut stmt = self.conn.prepare_cached(statement.sql())?;
        let columns = column_names(&stmt);
        let mut rows = stmt.query(named_params(statement).as_slice())?;
        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            result.push(read_row(row, &columns)?);
        }
        Ok(result)
    }

    fn query_first(&self, statement: &Statement) -> DbResult<Option<SqlRow>> {
        let mut stmt = self.conn.prepare_cached(statement.sql())?;
        let columns = column_names(&stmt);
        let mut rows = stmt.query(named_params(statement).as_slice())?;
        let first = match rows.next()? {
            Some(row) => Some(read_row(row, &columns)?),
            None => None,
        };
        Ok(first)
    }

    fn begin_scope(&self, scope: &'static str) -> DbResult<()> {
        let scope = scope_name(scope)?;
        self.conn.execute_batch(&format!("SAVEPOINT {scope};"))?;
        Ok(())
    }

    fn commit_scope(&self, scope: &'static str) -> DbResult<()> {
        let scope = scope_name(scope)?;
        self.conn
            .execute_batch(&format!("RELEASE SAVEPOINT {scope};"))?;
        Ok(())
    }

    fn rollback_scope(&self, scope: &'static str) -> DbResult<()> {
        let scope = scope_name(scope)?;
        self.conn.execute_batch(&format!(
            "ROLLBACK TO SAVEPOINT {scope}; RELEASE SAVEPOINT {scope};"
        ))?;
        Ok(())
    }
}

/// Savepoint names cannot be bound as parameters, so only plain
/// identifiers are accepted.
fn scope_name(scope: &'static str) -> DbResult<&'static str> {
    let mut chars = scope.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(scope)
    } else {
        Err(DbError::InvalidScopeName(scope))
    }
}

fn named_params(statement: &Statement) -> Vec<(&str, &dyn ToSql)> {
    statement
        .params()
        .iter()
        .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
        .collect()
}

fn column_names(stmt: &rusqlite::Statement<'_>) -> Vec<String> {
    stmt.column_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn read_row(row: &Row<'_>, columns: &[String]) -> DbResult<SqlRow> {
    let mut result = SqlRow::new();
    for (index, name) in columns.iter().enumerate() {
        result = result.with(name.clone(), row.get::<_, Value>(index)?);
    }
    Ok(result)
}
