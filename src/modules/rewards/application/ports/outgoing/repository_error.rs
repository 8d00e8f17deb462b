#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("user not found")]
    UserNotFound,

    #[error("task not found")]
    TaskNotFound,

    #[error("user already exists")]
    UserAlreadyExists,

    /// Only produced by `UserRepository::verify_password`.
    #[error("invalid password")]
    InvalidPassword,

    #[error("referrer already set")]
    ReferrerAlreadySet,

    #[error("Password hashing error: {0}")]
    PasswordHashing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
