//! Backend entry-point: loads settings, prepares persistence and serves the API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use loginapp::config::AppSettings;
use loginapp::inbound::http::health::HealthState;
use loginapp::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, create_server, watch_shutdown};

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

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let mut config = ServerConfig::from_settings(&settings)?;

    if let Some(database_url) = settings.database_url() {
        run_migrations(database_url)
            .await
            .map_err(|e| io::Error::other(format!("database migration failed: {e}")))?;
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(|e| io::Error::other(format!("database pool build failed: {e}")))?;
        config = config.with_db_pool(pool);
    }

    info!(bind_addr = %config.bind_addr(), "starting server");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(watch_shutdown(tokio::signal::ctrl_c(), health_state));
    server.await
}
