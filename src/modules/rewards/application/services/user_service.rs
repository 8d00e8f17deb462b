use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::rewards::application::domain::entities::{LeaderboardUser, UserStatus};
use crate::modules::rewards::application::ports::incoming::use_cases::{
    UserServiceError, UserUseCases,
};
use crate::modules::rewards::application::ports::outgoing::UnitOfWork;

pub const DEFAULT_LEADERBOARD_LIMIT: u64 = 10;
pub const MAX_LEADERBOARD_LIMIT: u64 = 100;

#[derive(Debug, Clone)]
pub struct UserService<U>
where
    U: UnitOfWork,
{
    uow: U,
}

impl<U> UserService<U>
where
    U: UnitOfWork,
{
    pub fn new(uow: U) -> Self {
        Self { uow }
    }

    fn effective_limit(limit: i64) -> u64 {
        match u64::try_from(limit) {
            Ok(l) if (1..=MAX_LEADERBOARD_LIMIT).contains(&l) => l,
            _ => DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

#[async_trait]
impl<U> UserUseCases for UserService<U>
where
    U: UnitOfWork,
{
    async fn complete_task(&self, user_id: Uuid, task_id: &str) -> Result<(), UserServiceError> {
        self.uow.users().get_by_id(user_id).await?;
        let task = self.uow.tasks().get_by_id(task_id).await?;

        // Best-effort duplicate check; a concurrent completion can slip past it.
        if self
            .uow
            .user_tasks()
            .is_task_completed(user_id, task_id)
            .await?
        {
            return Err(UserServiceError::TaskAlreadyCompleted);
        }

        let task_id = task.id.clone();
        let points = task.points;

        self.uow
            .with_transaction(move |repos| {
                Box::pin(async move {
                    repos.user_tasks().complete_task(user_id, &task_id).await?;
                    repos.users().add_balance(user_id, points).await?;
                    Ok::<(), UserServiceError>(())
                })
            })
            .await?;

        tracing::info!(%user_id, task_id = %task.id, points, "Task completed");
        Ok(())
    }

    async fn set_referrer(
        &self,
        user_id: Uuid,
        referrer_id: Uuid,
    ) -> Result<(), UserServiceError> {
        if user_id == referrer_id {
            return Err(UserServiceError::SelfReferral);
        }

        self.uow.users().set_referrer(user_id, referrer_id).await?;

        tracing::info!(%user_id, %referrer_id, "Referrer set");
        Ok(())
    }

    async fn get_user_status(&self, user_id: Uuid) -> Result<UserStatus, UserServiceError> {
        let user = self.uow.users().get_by_id(user_id).await?;
        let completed_tasks = self.uow.user_tasks().get_completed_tasks(user_id).await?;
        let total_points = user.balance;

        Ok(UserStatus {
            user,
            completed_tasks,
            total_points,
        })
    }

    async fn get_leaderboard(
        &self,
        limit: i64,
    ) -> Result<Vec<LeaderboardUser>, UserServiceError> {
        let limit = Self::effective_limit(limit);
        Ok(self.uow.users().get_leaderboard(limit).await?)
    }
}
