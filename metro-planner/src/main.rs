use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use metro_planner::cache::{CacheConfig, CachedPlanner};
use metro_planner::cli::run_interactive;
use metro_planner::config::AppConfig;
use metro_planner::lines::{LineDefinitions, mumbai_lines};
use metro_planner::planner::RoutePlanner;
use metro_planner::store::RouteStore;
use metro_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("metro_planner=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Load station data and line definitions (fail fast if unavailable)
    let catalog = config
        .stations
        .load()
        .await
        .unwrap_or_else(|e| panic!("Failed to load station data from {}: {e}", config.stations));

    let lines = match &config.lines {
        Some(path) => LineDefinitions::load_file(path).expect("Failed to load line definitions"),
        None => mumbai_lines(),
    };

    let planner = RoutePlanner::new(catalog, &lines, config.planner.clone());
    let store = RouteStore::in_dir(&config.output_dir);

    if std::env::args().nth(1).as_deref() == Some("interactive") {
        let stdin = io::stdin();
        run_interactive(&planner, Some(&store), stdin.lock(), io::stdout())
            .expect("Failed to run interactive session");
        return;
    }

    // Build app state
    let state = AppState::new(CachedPlanner::new(planner, &CacheConfig::default()), store);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.addr;
    info!(%addr, "Metro route planner listening");
    info!("  GET  /health    - Health check");
    info!("  GET  /stations  - List stations");
    info!("  POST /route     - Plan a route");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
