// ABOUTME: Footprint advice prompt embedding the computed result and the questionnaire answers
// ABOUTME: Requests a greeting, the biggest contributor, and five tips with estimated savings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{render, Prompt, PromptTask};
use crate::models::{FootprintResult, LifestyleInput};

const TEMPLATE: &str = include_str!("footprint_advice.md");

/// Build the footprint advice prompt
#[must_use]
pub fn footprint_advice(footprint: &FootprintResult, inputs: &LifestyleInput) -> Prompt {
    let breakdown = &footprint.breakdown;
    let total = footprint.total.to_string();
    let transport = breakdown.transport.to_string();
    let electricity = breakdown.electricity.to_string();
    let food = breakdown.food.to_string();
    let lifestyle = breakdown.lifestyle.to_string();
    let distance_per_day = inputs.transport.distance_per_day.to_string();
    let units_per_month = inputs.electricity.units_per_month.to_string();
    let device_hours = inputs.lifestyle.device_hours.to_string();

    let text = render(
        TEMPLATE,
        &[
            ("total", total.as_str()),
            ("transport", transport.as_str()),
            ("electricity", electricity.as_str()),
            ("food", food.as_str()),
            ("lifestyle", lifestyle.as_str()),
            ("mode", inputs.transport.mode.as_str()),
            ("distance_per_day", distance_per_day.as_str()),
            ("units_per_month", units_per_month.as_str()),
            ("habit", inputs.food.habit.as_str()),
            (
                "shopping_frequency",
                inputs.lifestyle.shopping_frequency.as_str(),
            ),
            ("device_hours", device_hours.as_str()),
        ],
    );

    Prompt::text(PromptTask::FootprintAdvice, text)
}
