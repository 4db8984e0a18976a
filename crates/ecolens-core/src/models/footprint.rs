// ABOUTME: Monthly carbon footprint result with per-category breakdown
// ABOUTME: Values are rounded to two decimals only when the result is assembled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::units::FOOTPRINT_UNIT;

/// Per-category monthly emissions in kg CO₂
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintBreakdown {
    /// Commute emissions
    pub transport: f64,
    /// Household electricity emissions
    pub electricity: f64,
    /// Diet emissions
    pub food: f64,
    /// Shopping and device emissions
    pub lifestyle: f64,
}

impl FootprintBreakdown {
    /// Sum of the four categories
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.transport + self.electricity + self.food + self.lifestyle
    }
}

/// Monthly footprint estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    /// Total kg CO₂ per month
    pub total: f64,
    /// Per-category breakdown
    pub breakdown: FootprintBreakdown,
    /// Always `kg CO₂/month`
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    FOOTPRINT_UNIT.to_owned()
}

/// Round half away from zero to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl FootprintResult {
    /// Build a result from unrounded category sums
    ///
    /// The total is summed before rounding; each category is rounded on its own.
    #[must_use]
    pub fn from_unrounded(raw: FootprintBreakdown) -> Self {
        Self {
            total: round2(raw.sum()),
            breakdown: FootprintBreakdown {
                transport: round2(raw.transport),
                electricity: round2(raw.electricity),
                food: round2(raw.food),
                lifestyle: round2(raw.lifestyle),
            },
            unit: default_unit(),
        }
    }
}
