use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::{AuthError, RegisterRequest};
use crate::modules::rewards::application::domain::entities::User;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// 3 to 50 characters, unique
    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "alice@example.com")]
    pub email: String,

    /// At least 6 characters
    #[schema(example = "secret1")]
    pub password: String,
}

/// Token plus the user it was issued for
#[derive(Serialize, ToSchema)]
pub struct AuthPayload {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: User,
}

fn map_register_error(err: AuthError, username: &str) -> HttpResponse {
    match err {
        AuthError::UserExists => {
            warn!(%username, "Registration rejected: user exists");
            ApiResponse::conflict("Username or email already exists")
        }
        other => {
            error!(%username, error = %other, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates the account with a zero balance and returns an access token.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<AuthPayload>)),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 409, description = "Username or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterRequest::new(dto.username, dto.email, dto.password) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "Invalid registration input");
            return ApiResponse::bad_request_with_details("Invalid request body", &e.to_string());
        }
    };
    let username = request.username().to_string();

    let user = match data.auth_use_cases.register(request).await {
        Ok(user) => user,
        Err(e) => return map_register_error(e, &username),
    };

    let token = match data.auth_use_cases.generate_token(&user) {
        Ok(token) => token,
        Err(e) => {
            error!(user_id = %user.id, error = %e, "Token generation failed");
            return ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate token",
                None,
            );
        }
    };

    info!(user_id = %user.id, %username, "User registered successfully");
    ApiResponse::created("User registered successfully", AuthPayload { token, user })
}
