use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create user_tasks completion table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(UserTasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserTasks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserTasks::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserTasks::TaskId).string_len(64).not_null())
                    .col(
                        ColumnDef::new(UserTasks::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserTasks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // FK → users
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_tasks_user_id")
                            .from(UserTasks::Table, UserTasks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → tasks
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_tasks_task_id")
                            .from(UserTasks::Table, UserTasks::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Completion lookups: (user_id, task_id) existence and per-user listing.
        // Not unique: duplicate completion is guarded by the service check.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_user_tasks_user_task
                ON user_tasks (user_id, task_id)
                WHERE completed = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_user_tasks_user_task;")
            .await?;

        manager
            .drop_table(Table::drop().table(UserTasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserTasks {
    Table,
    Id,
    UserId,
    TaskId,
    Completed,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
}
