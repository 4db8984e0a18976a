// ABOUTME: Monthly carbon footprint calculator over the four lifestyle categories
// ABOUTME: Pure function of the questionnaire and the emission factor table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::factors::EmissionFactors;
use crate::constants::units::DAYS_PER_MONTH;
use crate::errors::{AppError, AppResult};
use crate::models::{FootprintBreakdown, FootprintResult, LifestyleInput};

/// Compute unrounded per-category monthly emissions
#[must_use]
pub fn category_emissions(input: &LifestyleInput, factors: &EmissionFactors) -> FootprintBreakdown {
    let transport = if input.transport.mode.is_zero_emission() {
        0.0
    } else {
        factors.transport_per_km(input.transport.mode)
            * input.transport.distance_per_day
            * DAYS_PER_MONTH
    };

    let electricity = input.electricity.units_per_month * factors.electricity_per_kwh;

    let food = factors.food_per_day(input.food.habit) * DAYS_PER_MONTH;

    let lifestyle = factors.shopping_per_month(input.lifestyle.shopping_frequency)
        + factors.device_per_hour * input.lifestyle.device_hours * DAYS_PER_MONTH;

    FootprintBreakdown {
        transport,
        electricity,
        food,
        lifestyle,
    }
}

/// Estimate the monthly footprint of a lifestyle
///
/// The total is summed from unrounded categories and rounded once; each
/// category in the breakdown is rounded on its own.
///
/// # Errors
///
/// Returns `InvalidInput` if any quantity is negative or not finite, or if
/// the quantities are so large that an emission figure overflows.
pub fn calculate_footprint(
    input: &LifestyleInput,
    factors: &EmissionFactors,
) -> AppResult<FootprintResult> {
    input.validate()?;
    let result = FootprintResult::from_unrounded(category_emissions(input, factors));

    let figures = [
        ("transport", result.breakdown.transport),
        ("electricity", result.breakdown.electricity),
        ("food", result.breakdown.food),
        ("lifestyle", result.breakdown.lifestyle),
        ("total", result.total),
    ];
    if let Some((category, _)) = figures.iter().find(|(_, value)| !value.is_finite()) {
        return Err(AppError::invalid_input(format!(
            "{category} emissions are too large to compute; check the entered quantities"
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ElectricityInput, FoodHabit, FoodInput, LifestyleHabits, ShoppingFrequency,
        TransportInput, TransportMode,
    };

    fn input(mode: TransportMode, distance: f64) -> LifestyleInput {
        LifestyleInput {
            transport: TransportInput {
                mode,
                distance_per_day: distance,
            },
            electricity: ElectricityInput {
                units_per_month: 0.0,
            },
            food: FoodInput {
                habit: FoodHabit::Vegan,
            },
            lifestyle: LifestyleHabits {
                shopping_frequency: ShoppingFrequency::Low,
                device_hours: 0.0,
            },
        }
    }

    #[test]
    fn test_human_powered_modes_emit_nothing() {
        let factors = EmissionFactors::STANDARD;
        for mode in [TransportMode::Bike, TransportMode::Walking] {
            let raw = category_emissions(&input(mode, 250.0), &factors);
            assert!(raw.transport.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_public_transport_scales_by_month() {
        let raw = category_emissions(
            &input(TransportMode::PublicTransport, 10.0),
            &EmissionFactors::STANDARD,
        );
        assert!((raw.transport - 26.7).abs() < 1e-9);
    }
}
