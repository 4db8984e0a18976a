// ABOUTME: Eco challenge catalog entry model
// ABOUTME: Read-only gamified actions with difficulty, category, duration, and reward points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// How hard a challenge is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeDifficulty {
    /// Small habit change
    Easy,
    /// Sustained effort
    Medium,
    /// Significant lifestyle change
    Hard,
}

/// Footprint category a challenge targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCategory {
    /// Commuting
    Transport,
    /// Diet
    Food,
    /// Household energy
    Electricity,
    /// Shopping and consumption
    Lifestyle,
}

/// How long a challenge runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeDuration {
    /// One week
    Weekly,
    /// One month
    Monthly,
}

/// A predefined challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Stable identifier
    pub id: u32,
    /// Short title
    pub title: &'static str,
    /// What the user has to do
    pub description: &'static str,
    /// kg CO₂ saved on completion
    pub co2_saved: u32,
    /// Difficulty
    pub difficulty: ChallengeDifficulty,
    /// Targeted category
    pub category: ChallengeCategory,
    /// Duration
    pub duration: ChallengeDuration,
    /// Reward points
    pub points: u32,
}
