pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::rewards;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::application::ports::incoming::use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::AuthService;
use crate::rewards::adapter::outgoing::unit_of_work_postgres::UnitOfWorkPostgres;
use crate::rewards::application::ports::incoming::use_cases::{ListTasksUseCase, UserUseCases};
use crate::rewards::application::services::{ListTasksService, UserService};
use crate::shared::api::custom_json_config;
use crate::shared::config::{AppConfig, LogConfig, LogFormat};
use crate::shared::{db, middleware};

use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth_use_cases: Arc<dyn AuthUseCases>,
    pub user_use_cases: Arc<dyn UserUseCases>,
    pub list_tasks_use_case: Arc<dyn ListTasksUseCase>,
}

/// `RUST_LOG` wins over `LOG_LEVEL` when both are set.
#[cfg(not(tarpaulin_include))]
fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{},actix_web=info", log.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    match log.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(&config.log);

    info!("Starting application...");
    if config.uses_default_jwt_secret() {
        tracing::warn!("JWT_SECRET_KEY is not set, falling back to the built-in default secret");
    }

    let conn = db::connect(&config.database).await?;
    db::run_migrations(&conn).await?;
    let db_arc = Arc::new(conn);

    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::from_settings(&config.argon2)?);
    let uow = UnitOfWorkPostgres::new(Arc::clone(&db_arc), hasher);

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(JwtConfig::from_settings(&config.jwt)));

    let state = AppState {
        auth_use_cases: Arc::new(AuthService::new(uow.clone(), Arc::clone(&token_provider))),
        user_use_cases: Arc::new(UserService::new(uow.clone())),
        list_tasks_use_case: Arc::new(ListTasksService::new(uow)),
    };

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .wrap(from_fn(middleware::catch_panic))
            .wrap(from_fn(middleware::request_logger))
            .wrap(middleware::cors())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .default_service(web::to(not_found))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Users
    cfg.service(crate::rewards::adapter::incoming::web::routes::get_leaderboard_handler);
    cfg.service(crate::rewards::adapter::incoming::web::routes::get_user_status_handler);
    cfg.service(crate::rewards::adapter::incoming::web::routes::complete_task_handler);
    cfg.service(crate::rewards::adapter::incoming::web::routes::set_referrer_handler);
    // Tasks
    cfg.service(crate::rewards::adapter::incoming::web::routes::get_tasks_handler);
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "endpoint not found",
        "message": "check the API documentation for available endpoints"
    }))
}

#[actix_web::main]
async fn main() {
    if let Err(e) = start().await {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
