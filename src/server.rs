// ABOUTME: HTTP server assembly for the EcoLens API
// ABOUTME: Merges every route group, applies body limit, CORS, and tracing layers, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server
//!
//! [`EcoLensServer::router`] is the complete application; integration tests
//! drive it in-process and [`EcoLensServer::run`] binds it to a socket.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::middleware::{
    propagate_request_id_layer, set_request_id_layer, setup_cors, trace_layer,
};
use crate::resources::ServerResources;
use crate::routes::{
    AdviceRoutes, AwarenessRoutes, ChallengeRoutes, EcoBloomRoutes, EcoScanRoutes,
    FootprintRoutes, HealthRoutes,
};

/// The `EcoLens` HTTP server
pub struct EcoLensServer {
    resources: Arc<ServerResources>,
}

impl EcoLensServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete router with all middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        let config = &self.resources.config;

        Router::new()
            .merge(FootprintRoutes::routes(Arc::clone(&self.resources)))
            .merge(AdviceRoutes::routes(Arc::clone(&self.resources)))
            .merge(EcoScanRoutes::routes(Arc::clone(&self.resources)))
            .merge(EcoBloomRoutes::routes(Arc::clone(&self.resources)))
            .merge(AwarenessRoutes::routes(Arc::clone(&self.resources)))
            .merge(ChallengeRoutes::routes())
            .merge(HealthRoutes::routes(Arc::clone(&self.resources)))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.max_request_body_bytes))
            .layer(setup_cors(config))
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(trace_layer())
                    .layer(propagate_request_id_layer()),
            )
    }

    /// Bind and serve until Ctrl-C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid, the port cannot be bound,
    /// or the server fails while running.
    pub async fn run(self) -> AppResult<()> {
        let config = &self.resources.config;
        let addr: SocketAddr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| {
                AppError::config(format!(
                    "Invalid bind address {}:{}: {e}",
                    config.host, config.port
                ))
            })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")).with_source(e))?;

        info!("EcoLens+ backend listening on {addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")).with_source(e))?;

        info!("Server shut down cleanly");
        Ok(())
    }
}

/// Resolve when the process is asked to stop
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
