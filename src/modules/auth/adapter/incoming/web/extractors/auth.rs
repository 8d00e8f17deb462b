use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

const ADMIN_USERNAME: &str = "admin";

/// Identity taken from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

impl AuthenticatedUser {
    pub fn owns(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    pub fn is_admin(&self) -> bool {
        self.username == ADMIN_USERNAME
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                tracing::error!("Token provider is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let header = match req.headers().get("Authorization") {
            Some(h) => h,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Authorization header required",
                ))));
            }
        };

        let token = match extract_bearer_token(header.to_str().unwrap_or_default()) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Invalid authorization header format",
                ))));
            }
        };

        match token_provider.verify_token(token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.user_id,
                username: claims.username,
            })),
            Err(e) => {
                tracing::warn!(error = %e, path = %req.path(), "Rejected bearer token");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "Invalid token",
                ))))
            }
        }
    }
}

fn extract_bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}
