use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::rewards::application::domain::entities::Task;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct TasksPayload {
    pub tasks: Vec<Task>,
}

/// Task catalog
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "Available tasks", body = inline(SuccessResponse<TasksPayload>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/tasks")]
pub async fn get_tasks_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_tasks_use_case.execute().await {
        Ok(tasks) => ApiResponse::success("Tasks retrieved successfully", TasksPayload { tasks }),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list tasks");
            ApiResponse::internal_error()
        }
    }
}
