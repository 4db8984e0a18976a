// ABOUTME: Future impact simulator projecting monthly, yearly, and tree-equivalent savings
// ABOUTME: Improved footprint is floored at zero; each band derives its tree count from its own yearly figure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::sequestration::TREE_ABSORPTION_KG_PER_YEAR;
use crate::constants::units::MONTHS_PER_YEAR;
use crate::errors::{AppError, AppResult};
use crate::models::{ImpactBand, ImprovementItem, SimulationResult};

/// Project a monthly figure onto a year and into trees
#[must_use]
pub fn impact_band(monthly: f64) -> ImpactBand {
    let yearly = monthly * MONTHS_PER_YEAR;
    ImpactBand {
        monthly,
        yearly,
        trees: (yearly / TREE_ABSORPTION_KG_PER_YEAR).ceil().max(0.0) as u64,
    }
}

/// Sum the proposed savings; absent values count as zero
#[must_use]
pub fn total_savings(improvements: &[ImprovementItem]) -> f64 {
    improvements
        .iter()
        .filter_map(|item| item.potential_savings)
        .sum()
}

/// Simulate the effect of a set of improvements on a monthly footprint
///
/// # Errors
///
/// Returns `InvalidInput` if the footprint or any saving is negative or not
/// finite, or if a projected yearly figure overflows.
pub fn simulate_impact(
    current_footprint: f64,
    improvements: &[ImprovementItem],
) -> AppResult<SimulationResult> {
    ensure_non_negative("currentFootprint", current_footprint)?;
    for (index, item) in improvements.iter().enumerate() {
        if let Some(saving) = item.potential_savings {
            ensure_non_negative(&format!("improvements[{index}].potentialSavings"), saving)?;
        }
    }

    let savings = total_savings(improvements);
    let improved = (current_footprint - savings).max(0.0);

    let simulation = SimulationResult {
        current: impact_band(current_footprint),
        improved: impact_band(improved),
        savings: impact_band(savings),
    };

    for (band, yearly) in [
        ("current", simulation.current.yearly),
        ("improved", simulation.improved.yearly),
        ("savings", simulation.savings.yearly),
    ] {
        if !yearly.is_finite() {
            return Err(AppError::invalid_input(format!(
                "{band} yearly projection is too large to compute"
            )));
        }
    }

    Ok(simulation)
}

fn ensure_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}
