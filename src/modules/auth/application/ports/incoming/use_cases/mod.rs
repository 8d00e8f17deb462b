mod auth_use_cases;

pub use auth_use_cases::{
    AuthError, AuthUseCases, LoginRequest, LoginRequestError, RegisterRequest,
    RegisterRequestError,
};
