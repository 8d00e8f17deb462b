use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

use crate::shared::config::DatabaseConfig;

/// Pool settings derived from config.
///
/// sqlx has no cap on idle connections, so `max_idle_conns` is not mapped
/// onto the pool. No minimum is kept open; idle connections are closed after
/// `idle_timeout` instead.
pub fn pool_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_open_conns)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(config.conn_max_lifetime)
        .sqlx_logging(false);
    opt
}

/// Opens the Postgres pool and verifies it answers before returning.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let opt = pool_options(config);
    let conn = Database::connect(opt).await?;
    ping(&conn).await?;
    tracing::info!(
        max_open_conns = config.max_open_conns,
        max_idle_conns = config.max_idle_conns,
        "Connected to database"
    );
    Ok(conn)
}

pub async fn ping<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    conn.execute(Statement::from_string(conn.get_database_backend(), "SELECT 1"))
        .await
        .map(|_| ())
}

pub async fn run_migrations(conn: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(conn, None).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
