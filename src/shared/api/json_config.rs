use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let details = err.to_string();
        tracing::debug!(error = %details, "Rejected JSON payload");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request_with_details("Invalid request body", &details),
        )
        .into()
    })
}
