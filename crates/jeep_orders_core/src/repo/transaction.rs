//! Atomic scope helper for multi-statement writes.

use crate::db::QueryExecutor;
use crate::repo::{RepoError, RepoResult};
use log::error;

/// Runs `work` inside the named scope.
///
/// The scope is committed when `work` succeeds and rolled back when `work`
/// (or the commit) fails. A failed rollback is reported as
/// `RepoError::RollbackFailed` carrying both errors.
pub fn with_transaction<E, T, F>(executor: &E, scope: &'static str, work: F) -> RepoResult<T>
where
    E: QueryExecutor + ?Sized,
    F: FnOnce(&E) -> RepoResult<T>,
{
    executor.begin_scope(scope)?;

    let outcome = work(executor).and_then(|value| {
        executor.commit_scope(scope)?;
        Ok(value)
    });

    match outcome {
        Ok(value) => Ok(value),
        Err(cause) => match executor.rollback_scope(scope) {
            Ok(()) => Err(cause),
            Err(rollback) => {
                error!(
                    "event=scope_rollback module=repo status=error scope={scope} error={rollback}"
                );
                Err(RepoError::RollbackFailed {
                    cause: Box::new(cause),
                    rollback,
                })
            }
        },
    }
}
