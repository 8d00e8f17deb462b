use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthError, AuthUseCases, LoginRequest, RegisterRequest,
};
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::rewards::application::domain::entities::{NewUser, User};
use crate::modules::rewards::application::ports::outgoing::{Repositories, RepositoryError};

#[derive(Clone)]
pub struct AuthService<R>
where
    R: Repositories,
{
    repositories: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> AuthService<R>
where
    R: Repositories,
{
    pub fn new(repositories: R, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            repositories,
            token_provider,
        }
    }

    /// `Ok(true)` when a user matches, `Ok(false)` when none does.
    fn exists(result: Result<User, RepositoryError>) -> Result<bool, AuthError> {
        match result {
            Ok(_) => Ok(true),
            Err(RepositoryError::UserNotFound) => Ok(false),
            Err(e) => Err(AuthError::RepositoryError(e.to_string())),
        }
    }
}

#[async_trait]
impl<R> AuthUseCases for AuthService<R>
where
    R: Repositories,
{
    async fn register(&self, request: RegisterRequest) -> Result<User, AuthError> {
        let users = self.repositories.users();

        if Self::exists(users.get_by_username(request.username()).await)?
            || Self::exists(users.get_by_email(request.email()).await)?
        {
            return Err(AuthError::UserExists);
        }

        let new_user = NewUser {
            username: request.username().to_string(),
            email: request.email().to_string(),
        };

        let user = users
            .create_with_password(new_user, request.password())
            .await
            .map_err(|e| match e {
                RepositoryError::UserAlreadyExists => AuthError::UserExists,
                RepositoryError::PasswordHashing(msg) => AuthError::HashingFailed(msg),
                other => AuthError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    async fn login(&self, request: LoginRequest) -> Result<User, AuthError> {
        self.repositories
            .users()
            .verify_password(request.username(), request.password())
            .await
            .map_err(|e| match e {
                RepositoryError::UserNotFound | RepositoryError::InvalidPassword => {
                    AuthError::InvalidCredentials
                }
                RepositoryError::PasswordHashing(msg) => AuthError::HashingFailed(msg),
                other => AuthError::RepositoryError(other.to_string()),
            })
    }

    fn generate_token(&self, user: &User) -> Result<String, AuthError> {
        self.token_provider
            .generate_access_token(user.id, &user.username)
            .map_err(|e| AuthError::TokenGenerationFailed(e.to_string()))
    }
}
