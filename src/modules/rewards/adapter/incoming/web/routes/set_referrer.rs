use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{map_user_service_error, parse_body, parse_user_id};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetReferrerRequest {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub referrer_id: String,
}

/// Record who referred the user. Can only be set once.
#[utoipa::path(
    post,
    path = "/api/users/{id}/referrer",
    tag = "users",
    params(("id" = String, Path, description = "User ID (UUID)")),
    request_body = SetReferrerRequest,
    responses(
        (status = 200, description = "Referrer set", body = MessageResponse),
        (status = 400, description = "Invalid request or self referral", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Referrer already set", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/users/{id}/referrer")]
pub async fn set_referrer_handler(
    auth: AuthenticatedUser,
    path: web::Path<String>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = match parse_user_id(&path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    if !auth.owns(user_id) {
        return ApiResponse::forbidden("Access denied");
    }

    let req: SetReferrerRequest = match parse_body(&body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let raw_referrer = req.referrer_id;
    let referrer_id = match Uuid::parse_str(raw_referrer.trim()) {
        Ok(id) => id,
        Err(e) => {
            warn!(%user_id, referrer_id = %raw_referrer, "Invalid set referrer request");
            return ApiResponse::bad_request_with_details("Invalid request body", &e.to_string());
        }
    };

    match data.user_use_cases.set_referrer(user_id, referrer_id).await {
        Ok(()) => {
            info!(%user_id, %referrer_id, "Referrer set successfully");
            ApiResponse::message("Referrer set successfully")
        }
        Err(e) => {
            error!(%user_id, %referrer_id, error = %e, "Failed to set referrer");
            map_user_service_error(&e)
        }
    }
}
