#![allow(dead_code)]

use jeep_orders_core::db::open_db_in_memory;
use jeep_orders_core::{DbError, DbResult, QueryExecutor, SqlRow, Statement};
use rusqlite::{ffi, Connection};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Opens an in-memory store seeded with a small catalog.
pub fn seeded_store() -> Connection {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO customers (customer_id, first_name, last_name, phone) VALUES
            ('ATTAWAY_HALEE', 'Halee', 'Attaway', '555-0101'),
            ('MORISON_LINA', 'Lina', 'Morison', '555-0102');

         INSERT INTO models (model_id, trim_level, num_doors) VALUES
            ('WRANGLER', 'Sport', 2),
            ('WRANGLER', 'Sport', 4),
            ('GRAND_CHEROKEE', 'Laredo', 4);

         INSERT INTO colors (color_id) VALUES ('EXT_SARGE_GREEN'), ('EXT_FIRECRACKER_RED');

         INSERT INTO engines (engine_id) VALUES ('2_0_TURBO'), ('3_6_GAS');

         INSERT INTO tires (tire_id, tire_size, manufacturer, warranty_miles, price) VALUES
            ('35_TOYO', '35 inch', 'Toyo', 60000, '1295.50'),
            ('37_GOODYEAR', '37 inch', 'Goodyear', 50000, '1810.00');

         INSERT INTO options (option_id, category, manufacturer, name, price) VALUES
            ('DOOR_QUAD_4', 'DOOR', 'Mopar', 'Half doors', '1895.00'),
            ('EXT_WARN_WINCH', 'EXTERIOR', 'Warn', 'Winch', '1299.99'),
            ('STOR_ROLL', 'STORAGE', 'Tuffy', 'Roll cage storage', '215.45'),
            ('TOP_SKY_ONE', 'TOP', 'Mopar', 'Sky one-touch top', '3995.00');",
    )
    .unwrap();
    conn
}

pub fn row_count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

pub fn constraint_failure(message: &str) -> DbError {
    DbError::Sqlite(rusqlite::Error::SqliteFailure(
        ffi::Error::new(ffi::SQLITE_CONSTRAINT),
        Some(message.to_string()),
    ))
}

pub fn io_failure() -> DbError {
    DbError::Sqlite(rusqlite::Error::SqliteFailure(
        ffi::Error::new(ffi::SQLITE_IOERR),
        Some("disk I/O error".to_string()),
    ))
}

/// One call observed by `RecordingExecutor`.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Execute(Statement),
    InsertReturningKey(Statement),
    QueryRows(Statement),
    QueryFirst(Statement),
    Begin(String),
    Commit(String),
    Rollback(String),
}

/// In-memory executor that records every call and replays scripted results.
pub struct RecordingExecutor {
    calls: RefCell<Vec<Call>>,
    results: RefCell<VecDeque<Vec<SqlRow>>>,
    generated_key: i64,
    writes: Cell<usize>,
    fail_write_at: Option<usize>,
    fail_rollback: bool,
    fail_query: bool,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            results: RefCell::new(VecDeque::new()),
            generated_key: 1,
            writes: Cell::new(0),
            fail_write_at: None,
            fail_rollback: false,
            fail_query: false,
        }
    }

    /// Queues the rows returned by the next query.
    pub fn with_result(self, rows: Vec<SqlRow>) -> Self {
        self.results.borrow_mut().push_back(rows);
        self
    }

    pub fn with_generated_key(mut self, key: i64) -> Self {
        self.generated_key = key;
        self
    }

    /// Fails the write with this zero-based index (header insert is 0).
    pub fn failing_write_at(mut self, index: usize) -> Self {
        self.fail_write_at = Some(index);
        self
    }

    pub fn failing_rollback(mut self) -> Self {
        self.fail_rollback = true;
        self
    }

    /// Fails every read with an I/O error.
    pub fn failing_query(mut self) -> Self {
        self.fail_query = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn query_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::QueryRows(_) | Call::QueryFirst(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_write(&self) -> DbResult<()> {
        let index = self.writes.get();
        self.writes.set(index + 1);
        if self.fail_write_at == Some(index) {
            return Err(constraint_failure("FOREIGN KEY constraint failed"));
        }
        Ok(())
    }

    fn next_result(&self) -> DbResult<Vec<SqlRow>> {
        if self.fail_query {
            return Err(io_failure());
        }
        Ok(self.results.borrow_mut().pop_front().unwrap_or_default())
    }
}

impl QueryExecutor for RecordingExecutor {
    fn execute(&self, statement: &Statement) -> DbResult<usize> {
        self.record(Call::Execute(statement.clone()));
        self.next_write()?;
        Ok(1)
    }

    fn insert_returning_key(&self, statement: &Statement) -> DbResult<i64> {
        self.record(Call::InsertReturningKey(statement.clone()));
        self.next_write()?;
        Ok(self.generated_key)
    }

    fn query_rows(&self, statement: &Statement) -> DbResult<Vec<SqlRow>> {
        self.record(Call::QueryRows(statement.clone()));
        self.next_result()
    }

    fn query_first(&self, statement: &Statement) -> DbResult<Option<SqlRow>> {
        self.record(Call::QueryFirst(statement.clone()));
        Ok(self.next_result()?.into_iter().next())
    }

    fn begin_scope(&self, scope: &'static str) -> DbResult<()> {
        self.record(Call::Begin(scope.to_string()));
        Ok(())
    }

    fn commit_scope(&self, scope: &'static str) -> DbResult<()> {
        self.record(Call::Commit(scope.to_string()));
        Ok(())
    }

    fn rollback_scope(&self, scope: &'static str) -> DbResult<()> {
        self.record(Call::Rollback(scope.to_string()));
        if self.fail_rollback {
            return Err(io_failure());
        }
        Ok(())
    }
}
