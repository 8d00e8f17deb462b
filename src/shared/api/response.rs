use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Success envelope: `{ "message": ..., "data": ... }`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Error envelope: `{ "error": ..., "details": ... }`.
#[derive(Serialize, Clone)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            message: message.to_string(),
            data: Some(data),
        })
    }

    pub fn created(message: &str, data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            message: message.to_string(),
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            message: message.to_string(),
            data: None,
        })
    }

    pub fn error(status: StatusCode, error: &str, details: Option<&str>) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            error: error.to_string(),
            details: details.map(str::to_string),
        })
    }

    pub fn bad_request(error: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, error, None)
    }

    pub fn bad_request_with_details(error: &str, details: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, error, Some(details))
    }

    pub fn unauthorized(error: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, error, None)
    }

    pub fn forbidden(error: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, error, None)
    }

    pub fn not_found(error: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, error, None)
    }

    pub fn conflict(error: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, error, None)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            None,
        )
    }
}
