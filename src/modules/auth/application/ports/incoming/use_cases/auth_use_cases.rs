use async_trait::async_trait;
use email_address::EmailAddress;

use crate::modules::rewards::application::domain::entities::User;

//
// ──────────────────────────────────────────────────────────
// Register Request
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("username must be between 3 and 50 characters")]
    InvalidUsername,

    #[error("email is not a valid address")]
    InvalidEmail,

    #[error("password must be at least 6 characters")]
    PasswordTooShort,
}

impl RegisterRequest {
    pub fn new(
        username: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterRequestError> {
        let username = username.trim();
        let len = username.chars().count();
        if !(3..=50).contains(&len) {
            return Err(RegisterRequestError::InvalidUsername);
        }

        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(RegisterRequestError::InvalidEmail);
        }

        if password.chars().count() < 6 {
            return Err(RegisterRequestError::PasswordTooShort);
        }

        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Login Request
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("username is required")]
    MissingUsername,

    #[error("password is required")]
    MissingPassword,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginRequestError::MissingUsername);
        }
        if password.is_empty() {
            return Err(LoginRequestError::MissingPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("user already exists")]
    UserExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    #[error("token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AuthUseCases: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<User, AuthError>;

    /// Unknown usernames and wrong passwords are indistinguishable to the caller.
    async fn login(&self, request: LoginRequest) -> Result<User, AuthError>;

    fn generate_token(&self, user: &User) -> Result<String, AuthError>;
}
