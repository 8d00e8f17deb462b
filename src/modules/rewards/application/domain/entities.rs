use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered participant. The password hash never leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub password_hash: String,
    pub balance: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a user; the id and timestamps are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Static catalog entry, seeded by migration.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

/// Completion record for a (user, task) pair.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserTask {
    pub id: Uuid,
    pub user_id: Uuid,
    pub task_id: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LeaderboardUser {
    pub id: Uuid,
    pub username: String,
    pub balance: i32,
    pub rank: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserStatus {
    pub user: User,
    pub completed_tasks: Vec<UserTask>,
    /// Always equal to `user.balance`.
    pub total_points: i32,
}
