/*!
 * Transaction Helper Utilities
 *
 * Runs a unit of work inside a database transaction: commit on `Ok`,
 * rollback on `Err`.
 */

use crate::errors::ServiceError;
use sea_orm::{DatabaseTransaction, TransactionError, TransactionTrait};
use std::future::Future;
use std::pin::Pin;

/// Type alias for boxed future used in transactions
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Execute a function within a database transaction
///
/// The error returned by `f` is handed back unchanged, so a `NotFound` raised
/// halfway through a unit of work is still a `NotFound` to the caller.
///
/// ```rust,ignore
/// with_transaction(&db, |txn| {
///     Box::pin(async move {
///         let unit = unit_row.insert(txn).await?;
///         good_row(unit.id).insert(txn).await?;
///         Ok(unit)
///     })
/// })
/// .await?;
/// ```
pub async fn with_transaction<C, F, T>(db: &C, f: F) -> Result<T, ServiceError>
where
    C: TransactionTrait,
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> BoxFuture<'a, Result<T, ServiceError>> + Send,
    T: Send,
{
    db.transaction::<_, T, ServiceError>(f)
        .await
        .map_err(|e| match e {
            TransactionError::Connection(db_err) => ServiceError::db_error(db_err),
            TransactionError::Transaction(err) => err,
        })
}
