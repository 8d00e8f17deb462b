use async_trait::async_trait;

use crate::modules::rewards::application::domain::entities::Task;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListTasksError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListTasksUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Task>, ListTasksError>;
}
