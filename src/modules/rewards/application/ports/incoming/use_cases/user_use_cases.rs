use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::rewards::application::domain::entities::{LeaderboardUser, UserStatus};
use crate::modules::rewards::application::ports::outgoing::RepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserServiceError {
    #[error("user not found")]
    UserNotFound,

    #[error("task not found")]
    TaskNotFound,

    #[error("task already completed")]
    TaskAlreadyCompleted,

    #[error("user cannot refer themselves")]
    SelfReferral,

    #[error("referrer already set")]
    ReferrerAlreadySet,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<RepositoryError> for UserServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UserNotFound => UserServiceError::UserNotFound,
            RepositoryError::TaskNotFound => UserServiceError::TaskNotFound,
            RepositoryError::ReferrerAlreadySet => UserServiceError::ReferrerAlreadySet,
            other => UserServiceError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UserUseCases: Send + Sync {
    /// Records the completion and credits the task's points atomically.
    async fn complete_task(&self, user_id: Uuid, task_id: &str) -> Result<(), UserServiceError>;

    async fn set_referrer(&self, user_id: Uuid, referrer_id: Uuid)
        -> Result<(), UserServiceError>;

    async fn get_user_status(&self, user_id: Uuid) -> Result<UserStatus, UserServiceError>;

    /// A `limit` outside `1..=100` is replaced by the default of 10.
    async fn get_leaderboard(&self, limit: i64)
        -> Result<Vec<LeaderboardUser>, UserServiceError>;
}
