// ABOUTME: Impact simulation request and result models
// ABOUTME: Monthly, yearly, and tree-equivalent figures for current, improved, and saved emissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One proposed reduction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementItem {
    /// Monthly kg CO₂ this change would save; absent counts as zero
    #[serde(default)]
    pub potential_savings: Option<f64>,
}

impl ImprovementItem {
    /// Create an item with a known saving
    #[must_use]
    pub const fn saving(kg_per_month: f64) -> Self {
        Self {
            potential_savings: Some(kg_per_month),
        }
    }
}

/// Emissions over one band of the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactBand {
    /// kg CO₂ per month
    pub monthly: f64,
    /// kg CO₂ per year
    pub yearly: f64,
    /// Trees needed to absorb the yearly figure, rounded up
    pub trees: u64,
}

/// Current vs improved projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Baseline as submitted
    pub current: ImpactBand,
    /// Baseline minus savings, floored at zero
    pub improved: ImpactBand,
    /// Total proposed savings
    pub savings: ImpactBand,
}
