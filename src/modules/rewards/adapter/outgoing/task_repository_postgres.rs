use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::modules::rewards::application::domain::entities::Task;
use crate::modules::rewards::application::ports::outgoing::{RepositoryError, TaskRepository};

use super::sea_orm_entity::tasks::{Column as TaskColumn, Entity as TaskEntity, Model as TaskModel};

pub struct TaskRepositoryPostgres<'c, C: ConnectionTrait> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> TaskRepositoryPostgres<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    fn map_to_task(model: TaskModel) -> Task {
        Task {
            id: model.id,
            name: model.name,
            description: model.description,
            points: model.points,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }

    fn map_db_err(e: DbErr) -> RepositoryError {
        RepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl<'c, C: ConnectionTrait> TaskRepository for TaskRepositoryPostgres<'c, C> {
    async fn get_by_id(&self, id: &str) -> Result<Task, RepositoryError> {
        TaskEntity::find_by_id(id.to_string())
            .one(self.conn)
            .await
            .map_err(Self::map_db_err)?
            .map(Self::map_to_task)
            .ok_or(RepositoryError::TaskNotFound)
    }

    async fn get_all(&self) -> Result<Vec<Task>, RepositoryError> {
        let models = TaskEntity::find()
            .order_by_asc(TaskColumn::CreatedAt)
            .order_by_asc(TaskColumn::Id)
            .all(self.conn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.into_iter().map(Self::map_to_task).collect())
    }
}
