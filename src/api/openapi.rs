use crate::api::schemas::{ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    AuthPayload, LoginUserRequest, RegisterUserRequest,
};
use crate::rewards::adapter::incoming::web::routes::{
    CompleteTaskRequest, LeaderboardPayload, SetReferrerRequest, TasksPayload,
};
use crate::rewards::application::domain::entities::{
    LeaderboardUser, Task, User, UserStatus, UserTask,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Rewards API",
        version = "1.0.0",
        description = "Registration, task completion, referrals and leaderboard"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Users
        crate::rewards::adapter::incoming::web::routes::get_user_status_handler,
        crate::rewards::adapter::incoming::web::routes::get_leaderboard_handler,
        crate::rewards::adapter::incoming::web::routes::complete_task_handler,
        crate::rewards::adapter::incoming::web::routes::set_referrer_handler,

        // Tasks
        crate::rewards::adapter::incoming::web::routes::get_tasks_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            RegisterUserRequest,
            LoginUserRequest,
            AuthPayload,
            CompleteTaskRequest,
            SetReferrerRequest,
            LeaderboardPayload,
            TasksPayload,
            User,
            Task,
            UserTask,
            UserStatus,
            LeaderboardUser
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Balances, referrals and leaderboard"),
        (name = "tasks", description = "Task catalog"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/auth/register or /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
