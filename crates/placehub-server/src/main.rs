//! # PlaceHub Server
//!
//! Main entry point for the PlaceHub placement platform API.

use placehub_config::ConfigLoader;
use placehub_core::{PlacehubError, PlacehubResult};
use placehub_db::DatabaseInterface;
use placehub_rest::create_router;
use placehub_server::{di, startup};
use placehub_service::{spawn_refresh_jobs, spawn_refresh_notices, CacheWarmer};
use shaku::HasComponent;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting PlaceHub server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> PlacehubResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    let module = di::build_module(&config)?;

    // Apply pending migrations before accepting traffic.
    let database: Arc<dyn DatabaseInterface> = module.resolve();
    database.run_migrations().await?;

    // Prime the job and notice caches in the background.
    let warmer: Arc<dyn CacheWarmer> = module.resolve();
    spawn_refresh_jobs(Arc::clone(&warmer));
    spawn_refresh_notices(warmer);

    let router = create_router(module.as_ref(), &config.server, &config.security);

    startup::print_banner();
    startup::print_startup_info(&config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PlacehubError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PlacehubError::internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "info,placehub_server=debug,placehub_rest=debug,placehub_service=debug,\
             placehub_db=debug,placehub_cache=debug,tower_http=debug",
        )
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
