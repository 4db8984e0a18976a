// ABOUTME: Route handlers for carbon footprint calculation and future impact simulation
// ABOUTME: Thin wrappers over the pure calculator and simulator using the shared factor table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Footprint routes
//!
//! Neither endpoint touches an external service; both answer from the
//! emission factor table held in [`ServerResources`].

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
use crate::footprint::{calculate_footprint, simulate_impact};
use crate::models::{FootprintResult, ImprovementItem, LifestyleInput, SimulationResult};
use crate::resources::ServerResources;

/// Response for a footprint calculation
#[derive(Debug, Serialize, Deserialize)]
pub struct FootprintResponse {
    /// Always `true`
    pub success: bool,
    /// Total, breakdown, and unit
    #[serde(flatten)]
    pub footprint: FootprintResult,
}

/// Request body for an impact simulation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateImpactRequest {
    /// Baseline monthly footprint in kg CO₂
    pub current_footprint: f64,
    /// Proposed reductions
    pub improvements: Vec<ImprovementItem>,
}

/// Response for an impact simulation
#[derive(Debug, Serialize, Deserialize)]
pub struct SimulateImpactResponse {
    /// Always `true`
    pub success: bool,
    /// Current, improved, and saved bands
    pub simulation: SimulationResult,
}

/// Footprint routes handler
pub struct FootprintRoutes;

impl FootprintRoutes {
    /// Create all footprint routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/calculate-footprint", post(Self::handle_calculate))
            .route("/api/simulate-impact", post(Self::handle_simulate))
            .with_state(resources)
    }

    /// Handle POST /api/calculate-footprint
    async fn handle_calculate(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(input): JsonBody<LifestyleInput>,
    ) -> Result<Response, AppError> {
        let footprint = calculate_footprint(&input, &resources.emission_factors)?;

        let response = FootprintResponse {
            success: true,
            footprint,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/simulate-impact
    async fn handle_simulate(
        JsonBody(request): JsonBody<SimulateImpactRequest>,
    ) -> Result<Response, AppError> {
        let simulation = simulate_impact(request.current_footprint, &request.improvements)?;

        let response = SimulateImpactResponse {
            success: true,
            simulation,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
