use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::ports::incoming::use_cases::{
    AuthError, AuthUseCases, LoginRequest, RegisterRequest,
};
use crate::rewards::application::domain::entities::{LeaderboardUser, Task, User, UserStatus};
use crate::rewards::application::ports::incoming::use_cases::{
    ListTasksError, ListTasksUseCase, UserServiceError, UserUseCases,
};

fn sample_user(id: Uuid, username: &str, balance: i32) -> User {
    let now = Utc::now();
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "not-a-real-hash".to_string(),
        balance,
        referrer_id: None,
        created_at: now,
        updated_at: now,
    }
}

//
// Auth
//

#[derive(Default, Clone)]
pub struct StubAuthUseCases {
    error: Option<AuthError>,
    token_error: bool,
}

impl StubAuthUseCases {
    pub fn failing(error: AuthError) -> Self {
        Self {
            error: Some(error),
            token_error: false,
        }
    }

    /// Register and login succeed but signing the token fails.
    pub fn token_failure() -> Self {
        Self {
            error: None,
            token_error: true,
        }
    }

    fn outcome(&self, username: &str) -> Result<User, AuthError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(sample_user(Uuid::new_v4(), username, 0)),
        }
    }
}

#[async_trait]
impl AuthUseCases for StubAuthUseCases {
    async fn register(&self, request: RegisterRequest) -> Result<User, AuthError> {
        self.outcome(request.username())
    }

    async fn login(&self, request: LoginRequest) -> Result<User, AuthError> {
        self.outcome(request.username())
    }

    fn generate_token(&self, user: &User) -> Result<String, AuthError> {
        if self.token_error {
            return Err(AuthError::TokenGenerationFailed("stub".to_string()));
        }
        Ok(format!("stub-token-{}", user.id))
    }
}

//
// Users
//

#[derive(Default, Clone)]
pub struct StubUserUseCases {
    error: Option<UserServiceError>,
}

impl StubUserUseCases {
    pub fn failing(error: UserServiceError) -> Self {
        Self { error: Some(error) }
    }

    fn check(&self) -> Result<(), UserServiceError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserUseCases for StubUserUseCases {
    async fn complete_task(&self, _user_id: Uuid, _task_id: &str) -> Result<(), UserServiceError> {
        self.check()
    }

    async fn set_referrer(
        &self,
        _user_id: Uuid,
        _referrer_id: Uuid,
    ) -> Result<(), UserServiceError> {
        self.check()
    }

    async fn get_user_status(&self, user_id: Uuid) -> Result<UserStatus, UserServiceError> {
        self.check()?;
        let user = sample_user(user_id, "alice", 150);
        Ok(UserStatus {
            total_points: user.balance,
            user,
            completed_tasks: vec![],
        })
    }

    async fn get_leaderboard(
        &self,
        limit: i64,
    ) -> Result<Vec<LeaderboardUser>, UserServiceError> {
        self.check()?;
        let rows = [("alice", 200, 1), ("bob", 200, 1), ("carol", 50, 3)];
        Ok(rows
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|(username, balance, rank)| LeaderboardUser {
                id: Uuid::new_v4(),
                username: username.to_string(),
                balance,
                rank,
            })
            .collect())
    }
}

//
// Tasks
//

#[derive(Default, Clone)]
pub struct StubListTasksUseCase {
    fail: bool,
}

impl StubListTasksUseCase {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ListTasksUseCase for StubListTasksUseCase {
    async fn execute(&self) -> Result<Vec<Task>, ListTasksError> {
        if self.fail {
            return Err(ListTasksError::RepositoryError("stub".to_string()));
        }
        Ok(vec![Task {
            id: "1".to_string(),
            name: "referral".to_string(),
            description: "Refer a friend to join".to_string(),
            points: 100,
            created_at: Utc::now(),
        }])
    }
}
