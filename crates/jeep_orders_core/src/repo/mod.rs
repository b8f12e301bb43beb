//! Repository layer: data-access contracts over the order store.
//!
//! # Responsibility
//! - Define the order repository contract consumed by service callers.
//! - Map result rows to domain records and records to statements.
//!
//! # Invariants
//! - Not-found lookups return `Ok(None)`, never an error.
//! - Store failures propagate as `RepoError::Db`; nothing is swallowed.
//! - Multi-statement writes run inside one atomic scope.

use crate::db::DbError;
use thiserror::Error;

pub mod mapping;
pub mod order_repo;
pub mod transaction;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for order-store lookups and writes.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The store rejected a query or statement.
    #[error(transparent)]
    Db(#[from] DbError),
    /// A stored row cannot be converted to a valid domain record.
    #[error("invalid persisted data: {0}")]
    InvalidData(String),
    /// The connection lacks a table the repository needs.
    #[error("order repository requires table `{0}`")]
    MissingRequiredTable(&'static str),
    /// A write failed and undoing its partial effects failed as well; the
    /// store may hold an incomplete order.
    #[error("{cause}; rollback also failed: {rollback}")]
    RollbackFailed {
        cause: Box<RepoError>,
        rollback: DbError,
    },
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
