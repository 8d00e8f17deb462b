mod complete_task;
mod get_leaderboard;
mod get_tasks;
mod get_user_status;
mod set_referrer;

pub use complete_task::{__path_complete_task_handler, complete_task_handler, CompleteTaskRequest};
pub use get_leaderboard::{__path_get_leaderboard_handler, get_leaderboard_handler, LeaderboardPayload};
pub use get_tasks::{__path_get_tasks_handler, get_tasks_handler, TasksPayload};
pub use get_user_status::{__path_get_user_status_handler, get_user_status_handler};
pub use set_referrer::{__path_set_referrer_handler, set_referrer_handler, SetReferrerRequest};

use actix_web::HttpResponse;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::modules::rewards::application::ports::incoming::use_cases::UserServiceError;
use crate::shared::api::ApiResponse;

fn parse_user_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|_| ApiResponse::bad_request("Invalid user ID"))
}

/// Decodes a JSON body after the caller's identity has been checked.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, HttpResponse> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected JSON payload");
        ApiResponse::bad_request_with_details("Invalid request body", &e.to_string())
    })
}

/// Shared mapping for the user-scoped endpoints.
fn map_user_service_error(err: &UserServiceError) -> HttpResponse {
    match err {
        UserServiceError::UserNotFound => ApiResponse::not_found("User not found"),
        UserServiceError::TaskNotFound => ApiResponse::not_found("Task not found"),
        UserServiceError::TaskAlreadyCompleted => ApiResponse::conflict("Task already completed"),
        UserServiceError::ReferrerAlreadySet => ApiResponse::conflict("Referrer already set"),
        UserServiceError::SelfReferral => ApiResponse::bad_request("User cannot refer themselves"),
        UserServiceError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
