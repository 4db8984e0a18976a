// ABOUTME: Route handler serving the static eco challenge catalog
// ABOUTME: Returns the same eight challenges on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::challenges::CHALLENGES;
use crate::models::Challenge;

/// Response listing every challenge
#[derive(Debug, Serialize)]
pub struct ChallengesResponse {
    /// Always `true`
    pub success: bool,
    /// Full catalog
    pub challenges: &'static [Challenge],
}

/// Challenge catalog routes handler
pub struct ChallengeRoutes;

impl ChallengeRoutes {
    /// Create all challenge routes
    pub fn routes() -> Router {
        async fn challenges_handler() -> Json<ChallengesResponse> {
            Json(ChallengesResponse {
                success: true,
                challenges: &CHALLENGES,
            })
        }

        Router::new().route("/api/challenges", get(challenges_handler))
    }
}
