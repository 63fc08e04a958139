mod dashboard;
mod error;
mod itinerary;
mod routes;
mod state;

use std::sync::Arc;

use axum::serve;
use coldroute_planner::config::PlannerConfig;
use mimalloc::MiMalloc;
use tracing::{Level, info};

use crate::{routes::app, state::AppState};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const BIND_ADDR_ENV_VAR: &str = "COLDROUTE_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = PlannerConfig::from_env()?;
    let state = Arc::new(AppState {
        planner: config.build_planner(),
    });

    let bind_addr =
        std::env::var(BIND_ADDR_ENV_VAR).unwrap_or_else(|_| String::from(DEFAULT_BIND_ADDR));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!(
        "Listening on {} (OSRM {}, Nominatim {})",
        bind_addr, config.osrm_url, config.nominatim_url
    );

    serve(listener, app(state)).await?;

    Ok(())
}
