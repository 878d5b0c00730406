//! The running service context.

use super::BootstrapError;
use crate::config::ServiceConfig;
use crate::docs::ApiMetadata;
use crate::router::create_app_router;
use crate::state::{AppState, SharedState};
use axum::Router;
use std::{future::Future, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;

/// A started service: listener bound, router built, metadata published.
///
/// Dropping it without calling [`Application::run`] releases the listener.
pub struct Application {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
    state: SharedState,
}

impl Application {
    /// Builds the state and router for `config` and binds the listener.
    pub async fn build(config: ServiceConfig) -> Result<Self, BootstrapError> {
        let address = config.server.bind_address();
        let state = Arc::new(AppState::new(config));
        let router = create_app_router(state.clone());

        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| BootstrapError::Bind {
                address: address.clone(),
                source,
            })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| BootstrapError::Bind { address, source })?;

        tracing::info!(
            address = %local_addr,
            title = %state.metadata.title,
            version = %state.metadata.version,
            "service running"
        );

        Ok(Self {
            listener,
            local_addr,
            router,
            state,
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Title, version and description published by the service.
    pub fn metadata(&self) -> &ApiMetadata {
        &self.state.metadata
    }

    /// Configuration the service was started with.
    pub fn config(&self) -> &ServiceConfig {
        &self.state.config
    }

    /// Serves requests until Ctrl-C.
    pub async fn run(self) -> Result<(), BootstrapError> {
        self.run_until(shutdown_signal()).await
    }

    /// Serves requests until `signal` resolves, then drains in-flight requests.
    pub async fn run_until<F>(self, signal: F) -> Result<(), BootstrapError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
            .map_err(BootstrapError::Serve)?;

        tracing::info!("service stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
