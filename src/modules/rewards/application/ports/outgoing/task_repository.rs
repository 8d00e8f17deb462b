use async_trait::async_trait;

use super::RepositoryError;
use crate::modules::rewards::application::domain::entities::Task;

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Task, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Task>, RepositoryError>;
}
