use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use super::{RepositoryError, TaskRepository, UserRepository, UserTaskRepository};

pub type TransactionFuture<'c, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>;

/// Per-aggregate repositories sharing one connection binding.
///
/// The same accessors are handed to callers outside a transaction (bound to
/// the pool) and inside `UnitOfWork::with_transaction` (bound to the open
/// transaction).
pub trait Repositories: Send + Sync {
    fn users(&self) -> Box<dyn UserRepository + '_>;
    fn tasks(&self) -> Box<dyn TaskRepository + '_>;
    fn user_tasks(&self) -> Box<dyn UserTaskRepository + '_>;
}

#[async_trait]
pub trait UnitOfWork: Repositories {
    /// Runs `work` inside a transaction.
    ///
    /// Commits when `work` returns `Ok`. On `Err` the transaction is rolled
    /// back and the error is returned unchanged. Failures to begin or commit
    /// are converted through `From<RepositoryError>`.
    async fn with_transaction<F, T, E>(&self, work: F) -> Result<T, E>
    where
        F: for<'c> FnOnce(&'c dyn Repositories) -> TransactionFuture<'c, T, E> + Send,
        T: Send,
        E: From<RepositoryError> + Send;
}
