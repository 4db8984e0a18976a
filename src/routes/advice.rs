// ABOUTME: Route handler for personalized footprint reduction advice
// ABOUTME: Builds the advice prompt from a footprint result and the lifestyle answers behind it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::JsonBody;
use crate::errors::AppError;
use crate::llm::{generate, prompts};
use crate::models::{FootprintResult, LifestyleInput};
use crate::resources::ServerResources;

/// Request body for footprint advice
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    /// Result previously returned by the calculator
    pub footprint_data: FootprintResult,
    /// Answers the result was computed from
    pub user_inputs: LifestyleInput,
}

/// Response carrying the generated advice
#[derive(Debug, Serialize, Deserialize)]
pub struct AdviceResponse {
    /// Always `true`
    pub success: bool,
    /// Generated text, unprocessed
    pub advice: String,
}

/// AI advice routes handler
pub struct AdviceRoutes;

impl AdviceRoutes {
    /// Create all advice routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ai-advice", post(Self::handle_advice))
            .with_state(resources)
    }

    /// Handle POST /api/ai-advice
    async fn handle_advice(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(request): JsonBody<AdviceRequest>,
    ) -> Result<Response, AppError> {
        let prompt = prompts::footprint_advice(&request.footprint_data, &request.user_inputs);
        let advice = generate(resources.llm.as_ref(), prompt).await?;

        let response = AdviceResponse {
            success: true,
            advice,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
