use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, Set, Statement,
};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::rewards::application::domain::entities::{LeaderboardUser, NewUser, User};
use crate::modules::rewards::application::ports::outgoing::{RepositoryError, UserRepository};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};

/// User persistence over any sea-orm connection: the pool or an open transaction.
pub struct UserRepositoryPostgres<'c, C: ConnectionTrait> {
    conn: &'c C,
    hasher: Arc<dyn PasswordHasher>,
}

#[derive(Debug, FromQueryResult)]
struct LeaderboardRow {
    id: Uuid,
    username: String,
    balance: i32,
    rank: i64,
}

impl<'c, C: ConnectionTrait> UserRepositoryPostgres<'c, C> {
    pub fn new(conn: &'c C, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { conn, hasher }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            balance: model.balance,
            referrer_id: model.referrer_id,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn map_db_err(e: DbErr) -> RepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return RepositoryError::UserAlreadyExists;
        }
        RepositoryError::DatabaseError(e.to_string())
    }

    async fn find_one(&self, filter: sea_orm::Condition) -> Result<User, RepositoryError> {
        UserEntity::find()
            .filter(filter)
            .one(self.conn)
            .await
            .map_err(Self::map_db_err)?
            .map(Self::map_to_user)
            .ok_or(RepositoryError::UserNotFound)
    }

    fn add_balance_stmt(id: Uuid, points: i32) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE users
            SET balance = balance + $1,
                updated_at = NOW()
            WHERE id = $2
            "#,
            vec![points.into(), id.into()],
        )
    }

    /// Only writes when no referrer is recorded yet.
    fn set_referrer_stmt(user_id: Uuid, referrer_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE users
            SET referrer_id = $1,
                updated_at = NOW()
            WHERE id = $2
              AND referrer_id IS NULL
            "#,
            vec![referrer_id.into(), user_id.into()],
        )
    }

    /// Competition ranking: ties share a rank and the next rank skips.
    fn leaderboard_stmt(limit: u64) -> Statement {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT id,
                   username,
                   balance,
                   RANK() OVER (ORDER BY balance DESC) AS rank
            FROM users
            ORDER BY balance DESC, username ASC
            LIMIT $1
            "#,
            vec![limit.into()],
        )
    }
}

#[async_trait]
impl<'c, C: ConnectionTrait> UserRepository for UserRepositoryPostgres<'c, C> {
    async fn create_with_password(
        &self,
        user: NewUser,
        password: &str,
    ) -> Result<User, RepositoryError> {
        let password_hash = self
            .hasher
            .hash_password(password)
            .await
            .map_err(|e| RepositoryError::PasswordHashing(e.to_string()))?;

        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(password_hash),
            balance: Set(0),
            referrer_id: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(self.conn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::map_to_user(inserted))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User, RepositoryError> {
        UserEntity::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(Self::map_db_err)?
            .map(Self::map_to_user)
            .ok_or(RepositoryError::UserNotFound)
    }

    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError> {
        self.find_one(sea_orm::Condition::all().add(UserColumn::Username.eq(username)))
            .await
    }

    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.find_one(sea_orm::Condition::all().add(UserColumn::Email.eq(email)))
            .await
    }

    async fn add_balance(&self, id: Uuid, points: i32) -> Result<(), RepositoryError> {
        let result = self
            .conn
            .execute(Self::add_balance_stmt(id, points))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::UserNotFound);
        }
        Ok(())
    }

    async fn set_referrer(&self, user_id: Uuid, referrer_id: Uuid) -> Result<(), RepositoryError> {
        // Referrer must resolve before anything is written.
        self.get_by_id(referrer_id).await?;

        let result = self
            .conn
            .execute(Self::set_referrer_stmt(user_id, referrer_id))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        // 0 affected => the user is missing or already has a referrer
        self.get_by_id(user_id).await?;
        Err(RepositoryError::ReferrerAlreadySet)
    }

    async fn get_leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardUser>, RepositoryError> {
        let rows = LeaderboardRow::find_by_statement(Self::leaderboard_stmt(limit))
            .all(self.conn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| LeaderboardUser {
                id: row.id,
                username: row.username,
                balance: row.balance,
                rank: row.rank,
            })
            .collect())
    }

    async fn verify_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, RepositoryError> {
        let user = self.get_by_username(username).await?;

        let matches = self
            .hasher
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|e| RepositoryError::PasswordHashing(e.to_string()))?;

        if !matches {
            return Err(RepositoryError::InvalidPassword);
        }
        Ok(user)
    }
}
