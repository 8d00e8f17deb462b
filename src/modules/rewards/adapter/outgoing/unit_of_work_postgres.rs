use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::rewards::application::ports::outgoing::{
    Repositories, RepositoryError, TaskRepository, TransactionFuture, UnitOfWork, UserRepository,
    UserTaskRepository,
};

use super::task_repository_postgres::TaskRepositoryPostgres;
use super::user_repository_postgres::UserRepositoryPostgres;
use super::user_task_repository_postgres::UserTaskRepositoryPostgres;

/// Repositories bound to a single connection, pooled or transactional.
struct ConnectionRepositories<'c, C: ConnectionTrait> {
    conn: &'c C,
    hasher: &'c Arc<dyn PasswordHasher>,
}

impl<'c, C: ConnectionTrait> Repositories for ConnectionRepositories<'c, C> {
    fn users(&self) -> Box<dyn UserRepository + '_> {
        Box::new(UserRepositoryPostgres::new(self.conn, Arc::clone(self.hasher)))
    }

    fn tasks(&self) -> Box<dyn TaskRepository + '_> {
        Box::new(TaskRepositoryPostgres::new(self.conn))
    }

    fn user_tasks(&self) -> Box<dyn UserTaskRepository + '_> {
        Box::new(UserTaskRepositoryPostgres::new(self.conn))
    }
}

#[derive(Clone)]
pub struct UnitOfWorkPostgres {
    db: Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UnitOfWorkPostgres {
    pub fn new(db: Arc<DatabaseConnection>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { db, hasher }
    }
}

impl Repositories for UnitOfWorkPostgres {
    fn users(&self) -> Box<dyn UserRepository + '_> {
        Box::new(UserRepositoryPostgres::new(&*self.db, Arc::clone(&self.hasher)))
    }

    fn tasks(&self) -> Box<dyn TaskRepository + '_> {
        Box::new(TaskRepositoryPostgres::new(&*self.db))
    }

    fn user_tasks(&self) -> Box<dyn UserTaskRepository + '_> {
        Box::new(UserTaskRepositoryPostgres::new(&*self.db))
    }
}

#[async_trait]
impl UnitOfWork for UnitOfWorkPostgres {
    async fn with_transaction<F, T, E>(&self, work: F) -> Result<T, E>
    where
        F: for<'c> FnOnce(&'c dyn Repositories) -> TransactionFuture<'c, T, E> + Send,
        T: Send,
        E: From<RepositoryError> + Send,
    {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| E::from(RepositoryError::DatabaseError(e.to_string())))?;

        let outcome = {
            let scoped = ConnectionRepositories {
                conn: &txn,
                hasher: &self.hasher,
            };
            work(&scoped).await
        };

        match outcome {
            Ok(value) => {
                txn.commit()
                    .await
                    .map_err(|e| E::from(RepositoryError::DatabaseError(e.to_string())))?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(error = %rollback_err, "Transaction rollback failed");
                }
                Err(err)
            }
        }
    }
}
