use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::{AuthError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::register_user::AuthPayload;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginUserRequest {
    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "secret1")]
    pub password: String,
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginUserRequest,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthPayload>)),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(r) => r,
        Err(e) => {
            return ApiResponse::bad_request_with_details("Invalid request body", &e.to_string());
        }
    };
    let username = request.username().to_string();

    info!(%username, "Login attempt");

    let user = match data.auth_use_cases.login(request).await {
        Ok(user) => user,
        Err(AuthError::InvalidCredentials) => {
            warn!(%username, "Login failed: Invalid credentials");
            return ApiResponse::unauthorized("Invalid credentials");
        }
        Err(e) => {
            error!(%username, error = %e, "Login failed");
            return ApiResponse::internal_error();
        }
    };

    match data.auth_use_cases.generate_token(&user) {
        Ok(token) => {
            info!(user_id = %user.id, %username, "User logged in successfully");
            ApiResponse::success("Login successful", AuthPayload { token, user })
        }
        Err(e) => {
            error!(user_id = %user.id, error = %e, "Token generation failed");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate token",
                None,
            )
        }
    }
}
