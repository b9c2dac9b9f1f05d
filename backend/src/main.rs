//! Service entry-point: reads settings, opens the pool and serves HTTP.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use food_catalogue::domain::ApiKeyGuard;
use food_catalogue::inbound::http::health::HealthState;
use food_catalogue::outbound::persistence::{DbPool, PoolConfig};
use food_catalogue::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_env(&DefaultEnv::new()).map_err(std::io::Error::other)?;

    let pool_config =
        PoolConfig::new(settings.database_url.as_str()).with_max_size(settings.pool_max_size);
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(e.into_message()))?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(
        settings.bind_addr,
        pool,
        ApiKeyGuard::new(settings.api_key),
    );
    let server = create_server(health_state, config)?;
    info!(addr = %settings.bind_addr, "listening");
    server.await
}
