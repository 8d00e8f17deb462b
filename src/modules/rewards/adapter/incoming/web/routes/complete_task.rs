use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::{map_user_service_error, parse_body, parse_user_id};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CompleteTaskRequest {
    #[schema(example = "2")]
    pub task_id: String,
}

/// Mark a task as completed and credit its points
#[utoipa::path(
    post,
    path = "/api/users/{id}/task/complete",
    tag = "users",
    params(("id" = String, Path, description = "User ID (UUID)")),
    request_body = CompleteTaskRequest,
    responses(
        (status = 200, description = "Task completed", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 404, description = "User or task not found", body = ErrorResponse),
        (status = 409, description = "Task already completed", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/users/{id}/task/complete")]
pub async fn complete_task_handler(
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

    let req: CompleteTaskRequest = match parse_body(&body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    let task_id = req.task_id.trim().to_string();
    if task_id.is_empty() {
        warn!(%user_id, "Invalid complete task request");
        return ApiResponse::bad_request_with_details("Invalid request body", "task_id is required");
    }

    match data.user_use_cases.complete_task(user_id, &task_id).await {
        Ok(()) => {
            info!(%user_id, %task_id, "Task completed successfully");
            ApiResponse::message("Task completed successfully")
        }
        Err(e) => {
            error!(%user_id, %task_id, error = %e, "Failed to complete task");
            map_user_service_error(&e)
        }
    }
}
