use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::modules::rewards::application::domain::entities::{LeaderboardUser, NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Hashes `password` and inserts the user with a zero balance and no referrer.
    async fn create_with_password(
        &self,
        user: NewUser,
        password: &str,
    ) -> Result<User, RepositoryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<User, RepositoryError>;
    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError>;
    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError>;

    /// Credits `points` to the stored balance in a single statement.
    async fn add_balance(&self, id: Uuid, points: i32) -> Result<(), RepositoryError>;

    /// Fails with `UserNotFound` when the referrer does not resolve, and with
    /// `ReferrerAlreadySet` when the user already has one.
    async fn set_referrer(&self, user_id: Uuid, referrer_id: Uuid) -> Result<(), RepositoryError>;

    async fn get_leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardUser>, RepositoryError>;

    /// `UserNotFound` and `InvalidPassword` are reported separately here.
    async fn verify_password(&self, username: &str, password: &str)
        -> Result<User, RepositoryError>;
}
