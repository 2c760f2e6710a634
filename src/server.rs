//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use tokio::net::TcpListener;
use tokio::signal;

use crate::api::handlers::index::ENDPOINTS;
use crate::api::routes::create_router;
use crate::config::{Environment, settings::Settings};
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
    environment: Environment,
}

impl Server {
    /// Create a new server with the given settings
    pub fn new(settings: Settings, environment: Environment) -> Self {
        Self {
            settings,
            environment,
        }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Logs startup information
    /// 2. Builds the storefront client, cache and application state
    /// 3. Binds to configured address
    /// 4. Serves until Ctrl+C/SIGTERM, then drops cached entries
    ///
    /// # Errors
    /// - Storefront HTTP client construction errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        self.log_configuration();

        let state = AppState::from_settings(&self.settings)?;
        let cache = state.cache.clone();
        tracing::info!("Application state created");

        let router = create_router(state);

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");
        for (method, path, summary) in ENDPOINTS {
            tracing::info!(method, path, "{}", summary);
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        let dropped = cache.clear();
        tracing::info!(cache_entries_dropped = dropped, "Server shutdown complete");

        Ok(())
    }

    fn log_configuration(&self) {
        let settings = &self.settings;

        tracing::info!(
            app_name = %settings.application.name,
            app_version = %settings.application.version,
            environment = %self.environment,
            "Application starting"
        );

        tracing::info!(
            host = %settings.server.host,
            port = %settings.server.port,
            "Server configuration loaded"
        );

        tracing::info!(
            base_url = %settings.storefront.base_url,
            timeout_seconds = settings.storefront.timeout_seconds,
            default_country = %settings.storefront.default_country,
            default_limit = settings.storefront.default_limit,
            "Storefront configuration loaded"
        );

        tracing::info!(
            ttl_seconds = settings.cache.ttl_seconds,
            app_ttl_multiplier = settings.cache.app_ttl_multiplier,
            single_flight = settings.cache.single_flight,
            "Cache configuration loaded"
        );

        tracing::info!(
            level = %settings.logger.level,
            console_enabled = %settings.logger.console.enabled,
            file_enabled = %settings.logger.file.enabled,
            "Logger configuration loaded"
        );
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
///
/// If a signal handler cannot be installed the error is logged and that
/// branch never completes; the other signal still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
