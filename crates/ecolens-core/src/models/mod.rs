// ABOUTME: Domain models shared between the EcoLens calculators, lookups, and routes
// ABOUTME: Wire formats use camelCase to match the web client contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models

/// Eco challenge catalog entries
pub mod challenge;
/// Plant companion message kinds and moods
pub mod companion;
/// Footprint results
pub mod footprint;
/// Lifestyle questionnaire input
pub mod lifestyle;
/// Barcode lookup product records
pub mod product;
/// Impact simulation inputs and results
pub mod simulation;

pub use challenge::{Challenge, ChallengeCategory, ChallengeDifficulty, ChallengeDuration};
pub use companion::{CompanionMessageType, PlantMood};
pub use footprint::{round2, FootprintBreakdown, FootprintResult};
pub use lifestyle::{
    ElectricityInput, FoodHabit, FoodInput, LifestyleHabits, LifestyleInput, ShoppingFrequency,
    TransportInput, TransportMode,
};
pub use product::{ProductRecord, ProductSource, ProductSummary};
pub use simulation::{ImpactBand, ImprovementItem, SimulationResult};
