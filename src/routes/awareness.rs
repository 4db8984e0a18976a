// ABOUTME: Route handler for the climate awareness chat
// ABOUTME: Answers free-text climate questions in plain language through the AI service
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
use crate::resources::ServerResources;

/// Request body for a climate question
#[derive(Debug, Deserialize)]
pub struct AwarenessRequest {
    /// Question text
    #[serde(default)]
    pub question: Option<String>,
}

/// Response carrying the answer
#[derive(Debug, Serialize, Deserialize)]
pub struct AwarenessResponse {
    /// Always `true`
    pub success: bool,
    /// Generated answer, unprocessed
    pub answer: String,
}

/// Awareness chat routes handler
pub struct AwarenessRoutes;

impl AwarenessRoutes {
    /// Create all awareness chat routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/awareness-chat", post(Self::handle_question))
            .with_state(resources)
    }

    /// Handle POST /api/awareness-chat
    async fn handle_question(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(request): JsonBody<AwarenessRequest>,
    ) -> Result<Response, AppError> {
        let question = request
            .question
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| AppError::missing_field("question"))?;

        let answer = generate(resources.llm.as_ref(), prompts::climate_education(question)).await?;

        let response = AwarenessResponse {
            success: true,
            answer,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
