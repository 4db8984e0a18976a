// ABOUTME: Route handler for the MyEcoBloom plant companion
// ABOUTME: Generates a tone-specific companion message and derives plant mood from cumulative savings
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
use crate::constants::plant_mood::DEFAULT_PLANT_STAGE;
use crate::errors::AppError;
use crate::llm::{generate, prompts};
use crate::models::{CompanionMessageType, PlantMood};
use crate::resources::ServerResources;

/// What the user has done so far
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActions {
    /// Most recent sustainable action
    #[serde(default)]
    pub last_action: Option<String>,
    /// Cumulative kg CO₂ saved
    #[serde(default)]
    pub total_saved: Option<f64>,
}

/// Client-side plant state
#[derive(Debug, Default, Deserialize)]
pub struct PlantData {
    /// Growth stage label
    #[serde(default)]
    pub stage: Option<String>,
}

/// Request body for a companion message
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoBloomRequest {
    /// User progress; absent or `null` means no progress yet
    #[serde(default)]
    pub user_actions: Option<UserActions>,
    /// Plant state; absent or `null` means a new plant
    #[serde(default)]
    pub plant_data: Option<PlantData>,
    /// Message kind
    pub message_type: CompanionMessageType,
}

/// Response carrying the companion message
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoBloomResponse {
    /// Always `true`
    pub success: bool,
    /// Generated message, unprocessed
    pub message: String,
    /// Mood derived from cumulative savings
    pub plant_mood: PlantMood,
    /// Stage echoed from the request, `seedling` by default
    pub plant_stage: String,
}

/// `MyEcoBloom` routes handler
pub struct EcoBloomRoutes;

impl EcoBloomRoutes {
    /// Create all companion routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ecobloom", post(Self::handle_message))
            .with_state(resources)
    }

    /// Handle POST /api/ecobloom
    async fn handle_message(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(request): JsonBody<EcoBloomRequest>,
    ) -> Result<Response, AppError> {
        let user_actions = request.user_actions.unwrap_or_default();
        let total_saved = user_actions.total_saved.unwrap_or(0.0);
        if !total_saved.is_finite() || total_saved < 0.0 {
            return Err(AppError::invalid_input(format!(
                "userActions.totalSaved must be a non-negative number, got {total_saved}"
            )));
        }

        let last_action = user_actions
            .last_action
            .as_deref()
            .map(str::trim)
            .filter(|action| !action.is_empty());

        let prompt = prompts::companion_message(request.message_type, last_action, total_saved);
        let message = generate(resources.llm.as_ref(), prompt).await?;

        let plant_stage = request
            .plant_data
            .and_then(|plant| plant.stage)
            .filter(|stage| !stage.is_empty())
            .unwrap_or_else(|| DEFAULT_PLANT_STAGE.to_owned());

        let response = EcoBloomResponse {
            success: true,
            message,
            plant_mood: PlantMood::from_total_saved(total_saved),
            plant_stage,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
