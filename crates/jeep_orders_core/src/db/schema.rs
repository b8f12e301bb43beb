//! Baseline order-store schema.
//!
//! # Responsibility
//! - Create the eight order-store tables when they are missing.
//! - Check that a caller-supplied connection exposes those tables.
//!
//! # Invariants
//! - Applying the baseline is idempotent (`IF NOT EXISTS` only).
//! - This is not a migration runner: existing tables are never altered.

use crate::db::DbResult;
use rusqlite::Connection;

const BASELINE_SQL: &str = include_str!("schema.sql");

/// Tables the order repository reads or writes.
pub const REQUIRED_TABLES: [&str; 8] = [
    "customers",
    "models",
    "colors",
    "engines",
    "tires",
    "options",
    "orders",
    "order_options",
];

/// Creates any missing order-store tables.
pub fn apply_baseline(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(BASELINE_SQL)?;
    Ok(())
}

/// Returns the first required table missing from `conn`, if any.
pub fn first_missing_table(conn: &Connection) -> DbResult<Option<&'static str>> {
    for table in REQUIRED_TABLES {
        if !table_exists(conn, table)? {
            return Ok(Some(table));
        }
    }
    Ok(None)
}

fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
