use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::modules::rewards::application::domain::entities::UserTask;

#[async_trait]
pub trait UserTaskRepository: Send + Sync {
    /// Inserts a completed record. Does not check for an existing one.
    async fn complete_task(&self, user_id: Uuid, task_id: &str)
        -> Result<UserTask, RepositoryError>;

    async fn get_completed_tasks(&self, user_id: Uuid) -> Result<Vec<UserTask>, RepositoryError>;

    async fn is_task_completed(&self, user_id: Uuid, task_id: &str)
        -> Result<bool, RepositoryError>;
}
