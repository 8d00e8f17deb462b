use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tasks::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Tasks::Description).text().not_null())
                    .col(
                        ColumnDef::new(Tasks::Points)
                            .integer()
                            .not_null()
                            .check(Expr::col(Tasks::Points).gt(0)),
                    )
                    .col(
                        ColumnDef::new(Tasks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Seed catalog (tasks are never created through the API)
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO tasks (id, name, description, points) VALUES
                    ('1', 'referral', 'Invite a friend with your referral code', 100),
                    ('2', 'telegram', 'Subscribe to the Telegram channel', 50),
                    ('3', 'twitter', 'Follow us on Twitter', 50),
                    ('4', 'discord', 'Join the Discord server', 75),
                    ('5', 'profile', 'Complete your profile', 25)
                ON CONFLICT (id) DO NOTHING;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    Name,
    Description,
    Points,
    CreatedAt,
}
