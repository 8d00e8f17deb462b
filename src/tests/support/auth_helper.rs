use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub const TEST_JWT_SECRET: &str = "FAKE_JWT_SECRET_DO_NOT_USE";

pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        expiry_seconds: 3600,
    }))
}

/// Same shape the server registers, so `AuthenticatedUser` can find it.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(token_provider())
}

pub fn bearer(user_id: Uuid, username: &str) -> (&'static str, String) {
    let token = token_provider()
        .generate_access_token(user_id, username)
        .expect("failed to sign test token");
    ("Authorization", format!("Bearer {token}"))
}
