use std::panic::AssertUnwindSafe;
use std::time::Instant;

use actix_cors::Cors;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::http::header;
use actix_web::Error;
use futures::FutureExt;

use crate::shared::api::ApiResponse;

/// Any origin may call the API; credentials travel in the `Authorization`
/// header, not cookies.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(3600)
}

/// Turns a panic raised while handling a request into a logged 500.
pub async fn catch_panic<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    let http_req = req.request().clone();
    let method = req.method().to_string();
    let path = req.path().to_string();

    match AssertUnwindSafe(next.call(req)).catch_unwind().await {
        Ok(result) => result.map(ServiceResponse::map_into_left_body),
        Err(panic) => {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown".to_string());
            tracing::error!(%method, %path, %reason, "Panic recovered");

            Ok(ServiceResponse::new(http_req, ApiResponse::internal_error()).map_into_right_body())
        }
    }
}

/// Logs method, path, status and latency for every request.
pub async fn request_logger<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<B>, Error>
where
    B: MessageBody + 'static,
{
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.path().to_string();
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("-")
        .to_string();

    let result = next.call(req).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(res) => {
            let status = res.status().as_u16();
            if status >= 500 {
                tracing::error!(%method, %path, status, latency_ms, %client_ip, "Request failed");
            } else if status >= 400 {
                tracing::warn!(%method, %path, status, latency_ms, %client_ip, "Request rejected");
            } else {
                tracing::info!(%method, %path, status, latency_ms, %client_ip, "Request handled");
            }
        }
        Err(err) => {
            tracing::error!(%method, %path, latency_ms, %client_ip, error = %err, "Request errored");
        }
    }

    result
}
