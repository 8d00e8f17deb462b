use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::rewards::application::domain::entities::LeaderboardUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::{IntoParams, ToSchema};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    /// Positive integer, capped at 100. Defaults to 10.
    limit: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LeaderboardPayload {
    pub leaderboard: Vec<LeaderboardUser>,
    pub limit: i64,
    pub total: usize,
}

fn resolve_limit(raw: Option<&str>) -> Result<i64, HttpResponse> {
    let limit = match raw {
        None => DEFAULT_LIMIT,
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiResponse::bad_request("Invalid limit parameter"))?,
    };

    if limit <= 0 {
        return Err(ApiResponse::bad_request("Invalid limit parameter"));
    }
    Ok(limit.min(MAX_LIMIT))
}

/// Users ranked by balance
#[utoipa::path(
    get,
    path = "/api/users/leaderboard",
    tag = "users",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Leaderboard", body = inline(SuccessResponse<LeaderboardPayload>)),
        (status = 400, description = "Invalid limit parameter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/users/leaderboard")]
pub async fn get_leaderboard_handler(
    _auth: AuthenticatedUser,
    query: web::Query<LeaderboardQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let limit = match resolve_limit(query.limit.as_deref()) {
        Ok(l) => l,
        Err(resp) => return resp,
    };

    match data.user_use_cases.get_leaderboard(limit).await {
        Ok(leaderboard) => {
            debug!(limit, users_count = leaderboard.len(), "Leaderboard retrieved");
            let total = leaderboard.len();
            ApiResponse::success(
                "Leaderboard retrieved successfully",
                LeaderboardPayload {
                    leaderboard,
                    limit,
                    total,
                },
            )
        }
        Err(e) => {
            error!(limit, error = %e, "Failed to get leaderboard");
            ApiResponse::internal_error()
        }
    }
}
