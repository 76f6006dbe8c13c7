//! API Gateway Library
//!
//! HTTP surface of the hello/user API. Handlers call the services of
//! `user_service_lib` directly over one shared database connection pool.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

use user_service_lib::config::UserServiceConfig;
use user_service_lib::infra::Database;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Open the database, serve HTTP until a shutdown signal, then close the database.
pub async fn run(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let service_config = UserServiceConfig::from_env();
    let database = Database::connect(&service_config.database).await?;

    let result = serve(&config, database.clone()).await;

    database.close().await?;
    result
}

async fn serve(
    config: &GatewayConfig,
    database: Database,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::from_database(database, config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Gateway stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
