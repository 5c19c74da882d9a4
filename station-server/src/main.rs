use station_server::config::ServerConfig;
use station_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load the station reference set once (fail fast if unusable)
    let catalog = config.load_catalog().expect("Failed to load station catalog");
    match &config.catalog_path {
        Some(path) => info!(stations = catalog.len(), path = %path.display(), "loaded station catalog"),
        None => info!(stations = catalog.len(), "loaded built-in station catalog"),
    }
    info!(
        min_query_len = config.matcher.effective_min_len(),
        limit = config.matcher.limit,
        "matcher configured"
    );

    // Build app state
    let state = AppState::new(catalog, config.matcher, &config.cache);

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let addr = config.addr;
    info!("Station finder listening on http://{addr}");
    info!("  GET  /health                  - Health check");
    info!("  GET  /api/stations/search?q=  - Station autocomplete");
    info!("  GET  /api/stations/{{code}}     - Station lookup");
    info!("  POST /api/journeys/search     - Validate a journey search");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
