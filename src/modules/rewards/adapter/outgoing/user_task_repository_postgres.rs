use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, Statement,
};
use uuid::Uuid;

use crate::modules::rewards::application::domain::entities::UserTask;
use crate::modules::rewards::application::ports::outgoing::{
    RepositoryError, UserTaskRepository,
};

use super::sea_orm_entity::user_tasks::{
    ActiveModel as UserTaskActiveModel, Column as UserTaskColumn, Entity as UserTaskEntity,
    Model as UserTaskModel,
};

pub struct UserTaskRepositoryPostgres<'c, C: ConnectionTrait> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> UserTaskRepositoryPostgres<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    fn map_to_user_task(model: UserTaskModel) -> UserTask {
        UserTask {
            id: model.id,
            user_id: model.user_id,
            task_id: model.task_id,
            completed: model.completed,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }

    fn map_db_err(e: DbErr) -> RepositoryError {
        RepositoryError::DatabaseError(e.to_string())
    }

    fn completed_exists_stmt(user_id: Uuid, task_id: &str) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM user_tasks ut
                WHERE ut.user_id = $1
                  AND ut.task_id = $2
                  AND ut.completed = true
            ) AS completed
            "#,
            vec![user_id.into(), task_id.into()],
        )
    }
}

#[async_trait]
impl<'c, C: ConnectionTrait> UserTaskRepository for UserTaskRepositoryPostgres<'c, C> {
    async fn complete_task(
        &self,
        user_id: Uuid,
        task_id: &str,
    ) -> Result<UserTask, RepositoryError> {
        let record = UserTaskActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            task_id: Set(task_id.to_string()),
            completed: Set(true),
            created_at: NotSet,
        };

        let inserted = record.insert(self.conn).await.map_err(Self::map_db_err)?;
        Ok(Self::map_to_user_task(inserted))
    }

    async fn get_completed_tasks(&self, user_id: Uuid) -> Result<Vec<UserTask>, RepositoryError> {
        let models = UserTaskEntity::find()
            .filter(UserTaskColumn::UserId.eq(user_id))
            .filter(UserTaskColumn::Completed.eq(true))
            .order_by_asc(UserTaskColumn::CreatedAt)
            .all(self.conn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.into_iter().map(Self::map_to_user_task).collect())
    }

    async fn is_task_completed(
        &self,
        user_id: Uuid,
        task_id: &str,
    ) -> Result<bool, RepositoryError> {
        let row = self
            .conn
            .query_one(Self::completed_exists_stmt(user_id, task_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                RepositoryError::DatabaseError("Completion check returned no rows".to_string())
            })?;

        row.try_get("", "completed").map_err(Self::map_db_err)
    }
}
