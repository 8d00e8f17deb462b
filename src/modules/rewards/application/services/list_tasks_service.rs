use async_trait::async_trait;

use crate::modules::rewards::application::domain::entities::Task;
use crate::modules::rewards::application::ports::incoming::use_cases::{
    ListTasksError, ListTasksUseCase,
};
use crate::modules::rewards::application::ports::outgoing::Repositories;

#[derive(Debug, Clone)]
pub struct ListTasksService<R>
where
    R: Repositories,
{
    repositories: R,
}

impl<R> ListTasksService<R>
where
    R: Repositories,
{
    pub fn new(repositories: R) -> Self {
        Self { repositories }
    }
}

#[async_trait]
impl<R> ListTasksUseCase for ListTasksService<R>
where
    R: Repositories,
{
    async fn execute(&self) -> Result<Vec<Task>, ListTasksError> {
        self.repositories
            .tasks()
            .get_all()
            .await
            .map_err(|e| ListTasksError::RepositoryError(e.to_string()))
    }
}
