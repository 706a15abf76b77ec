//! API server implementation.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::Result;
use crate::config::ServerConfig;
use crate::middleware::apply_middleware;
use crate::routes::{HEALTH_PATH, SUM_PATH, routes};
use crate::state::AppState;

/// Build the complete application: routes plus middleware.
///
/// # Errors
/// Returns a config error if the middleware settings are unusable.
pub fn build_app(config: &ServerConfig) -> Result<Router> {
    apply_middleware(routes(AppState::new()), config)
}

/// numtally API server.
pub struct Server {
    config: ServerConfig,
    app: Router,
}

impl Server {
    /// Create a server from validated configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        config.validate()?;
        let app = build_app(&config)?;
        Ok(Self { config, app })
    }

    /// The configuration this server was built from.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            environment = %self.config.environment,
            "Server running on {addr}"
        );
        tracing::info!("Health check: http://{addr}{HEALTH_PATH}");
        tracing::info!("Sum endpoint: http://{addr}{SUM_PATH}");

        axum::serve(
            listener,
            self.app
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await?;

        tracing::info!("Server closed");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down gracefully..."),
        () = terminate => tracing::info!("Received SIGTERM, shutting down gracefully..."),
    }
}
