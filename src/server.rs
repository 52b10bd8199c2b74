//! HTTP server initialization and runtime setup.
//!
//! Builds the registry, telemetry sink, and Axum server from the loaded
//! configuration.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::ShortUrlService;
use crate::config::Config;
use crate::infrastructure::registry::InMemoryUrlRegistry;
use crate::infrastructure::telemetry::{LogEntry, LogSink, NullSink, RemoteLogSink};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory URL registry (empty on every start; persistence is out of
///   scope)
/// - Remote telemetry sink (or the no-op fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the bind fails or the server runtime errors out.
pub async fn run(config: Config) -> Result<()> {
    let telemetry: Arc<dyn LogSink> = match config.telemetry.clone() {
        Some(telemetry_config) => {
            tracing::info!("Telemetry sink enabled");
            Arc::new(RemoteLogSink::new(telemetry_config))
        }
        None => {
            tracing::info!("Telemetry sink disabled");
            Arc::new(NullSink)
        }
    };

    let registry = Arc::new(InMemoryUrlRegistry::new());
    let shortener = Arc::new(ShortUrlService::new(
        registry,
        config.default_validity_days,
    ));

    let state = AppState {
        shortener,
        telemetry: telemetry.clone(),
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    telemetry.emit(LogEntry::info(
        "service",
        format!("Server started on port {}", addr.port()),
    ));

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
