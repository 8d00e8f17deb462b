use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::rewards::application::domain::entities::UserStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{debug, error};

use super::{map_user_service_error, parse_user_id};

/// Balance and completed tasks of a user
///
/// Callers may only read their own status, except for the `admin` account.
#[utoipa::path(
    get,
    path = "/api/users/{id}/status",
    tag = "users",
    params(("id" = String, Path, description = "User ID (UUID)")),
    responses(
        (status = 200, description = "User status", body = inline(SuccessResponse<UserStatus>)),
        (status = 400, description = "Invalid user ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/users/{id}/status")]
pub async fn get_user_status_handler(
    auth: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = match parse_user_id(&path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    if !auth.owns(user_id) && !auth.is_admin() {
        return ApiResponse::forbidden("Access denied");
    }

    match data.user_use_cases.get_user_status(user_id).await {
        Ok(status) => {
            debug!(%user_id, "User status retrieved");
            ApiResponse::success("User status retrieved successfully", status)
        }
        Err(e) => {
            error!(%user_id, error = %e, "Failed to get user status");
            map_user_service_error(&e)
        }
    }
}
