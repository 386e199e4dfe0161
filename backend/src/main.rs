//! Backend entry-point: loads settings, selects the store, and serves the
//! users API with health probes and OpenAPI docs.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use users_backend::inbound::http::health::HealthState;
use users_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use users_backend::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|err| io::Error::other(format!("load settings: {err}")))?;
    let default_limit = settings
        .default_limit()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let mut config =
        ServerConfig::new(settings.host(), settings.port()).with_default_limit(default_limit);

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations() {
            let applied = run_pending_migrations(database_url)
                .await
                .map_err(|err| io::Error::other(format!("run migrations: {err}")))?;
            info!(applied, "database schema is current");
        }
        let pool_config =
            PoolConfig::new(database_url).with_max_connections(settings.db_max_connections());
        let pool = DbPool::build(&pool_config)
            .map_err(|err| io::Error::other(format!("create database pool: {err}")))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(host = settings.host(), port = settings.port(), "listening");

    let draining = health_state.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            draining.mark_draining();
        }
    });

    server.await
}
