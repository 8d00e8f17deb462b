use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;

use crate::shared::db;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

/// Liveness check
/// - No I/O
#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK",
        service: "user-rewards",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check
/// - Pings the database
#[get("/api/ready")]
pub async fn readiness(conn: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    match db::ping(&***conn).await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: "ok",
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                database: "unhealthy",
            })
        }
    }
}
