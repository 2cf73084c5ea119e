//! Backend entry-point: loads settings, builds the connection pool, and runs
//! the HTTP server until a shutdown signal drains it.

mod server;

use std::env;
use std::io;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use registry_backend::outbound::persistence::DbPool;
use server::{RegistrySettings, ServerConfig, build_health_state, create_server};

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

    let settings = RegistrySettings::load_from_iter(env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let database_url = settings.database_url()?;
    let bind_addr = settings.bind_addr()?;

    let pool = DbPool::new(settings.pool_config(database_url))
        .await
        .map_err(|err| io::Error::other(err.to_string()))?;

    let config = ServerConfig::new(bind_addr, pool.clone())
        .with_shutdown_timeout(settings.shutdown_timeout());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(make_metrics()?);

    let health_state = web::Data::new(build_health_state(&pool));
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "registry backend listening");

    let result = server.await;
    health_state.mark_unhealthy();
    info!("registry backend stopped");
    result
}

#[cfg(feature = "metrics")]
fn make_metrics() -> io::Result<actix_web_prom::PrometheusMetrics> {
    PrometheusMetricsBuilder::new("registry")
        .endpoint("/metrics")
        .build()
        .map_err(|err| io::Error::other(format!("configure Prometheus metrics: {err}")))
}
