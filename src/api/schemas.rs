use serde::Serialize;
use utoipa::ToSchema;

/// Standard success envelope
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = "Login successful")]
    pub message: String,
    pub data: T,
}

/// Success envelope without a payload
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Referrer set successfully")]
    pub message: String,
}

/// Standard error envelope
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid request body")]
    pub error: String,

    /// Present for validation failures
    #[schema(example = "password must be at least 6 characters")]
    pub details: Option<String>,
}
