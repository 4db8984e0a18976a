// ABOUTME: Health check and model catalog route handlers
// ABOUTME: Reports liveness and proxies the AI service's list of available models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! The health endpoint never touches an external service; the models
//! endpoint is a direct pass-through to the AI provider.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::constants::service_names::ECOLENS_DISPLAY_NAME;
use crate::errors::AppError;
use crate::llm::ModelInfo;
use crate::resources::ServerResources;

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok`
    pub status: String,
    /// Human-readable status line
    pub message: String,
}

/// Model catalog response
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    /// Always `true`
    pub success: bool,
    /// Models offered by the AI service
    pub models: Vec<ModelInfo>,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health and model catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/health", get(Self::handle_health))
            .route("/api/models", get(Self::handle_models))
            .with_state(resources)
    }

    /// Handle GET /api/health
    async fn handle_health() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_owned(),
            message: format!("{ECOLENS_DISPLAY_NAME} is running"),
        })
    }

    /// Handle GET /api/models
    async fn handle_models(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let models = resources.llm.list_models().await?;

        let response = ModelsResponse {
            success: true,
            models,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
