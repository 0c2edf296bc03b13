use hotel_server::{AppState, build_router, logger};

use hotel_config::Config;
use hotel_db::{IdentityStore, InMemoryIdentityStore, PgIdentityStore};

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

/// How often idle rate-limiter entries are dropped
const LIMITER_PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    let dotenv_path = dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Log file, if configured, lives under the config directory
    let log_file_path = match config.logging.file_path() {
        Some(relative) => Some(Config::config_dir()?.join(relative)),
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting hotel-server v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    let store = open_store(&config).await?;

    // Build application state
    let app_state = AppState::from_config(&config, store)?;

    // Drop limiter state for clients that have gone quiet
    let general_limiter = app_state.general_limiter.clone();
    let auth_limiter = app_state.auth_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            general_limiter.purge_idle_clients();
            auth_limiter.purge_idle_clients();
            log::debug!(
                "Rate limiters tracking {} / {} clients",
                general_limiter.tracked_clients(),
                auth_limiter.tracked_clients()
            );
        }
    });

    // Build router
    let app = build_router(app_state, &config);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);
    info!("API directory: http://{}/api", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

/// In-memory store, or Postgres with migrations applied
async fn open_store(config: &Config) -> Result<Arc<dyn IdentityStore>, Box<dyn Error>> {
    if config.database.is_memory() {
        warn!("Using the in-memory identity store - data is lost on restart");
        return Ok(Arc::new(InMemoryIdentityStore::new()));
    }

    info!("Connecting to database: {}", config.database.redacted_url());
    let pool =
        hotel_db::connect_pool(&config.database.url, config.database.max_connections).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    hotel_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    Ok(Arc::new(PgIdentityStore::new(pool)))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
