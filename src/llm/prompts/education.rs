// ABOUTME: Climate education prompt wrapping a free-text question
// ABOUTME: Asks for a plain-language answer with one example and one actionable insight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{render, Prompt, PromptTask};

const TEMPLATE: &str = include_str!("climate_education.md");

/// Build the climate education prompt for a user question
#[must_use]
pub fn climate_education(question: &str) -> Prompt {
    Prompt::text(
        PromptTask::ClimateEducation,
        render(TEMPLATE, &[("question", question.trim())]),
    )
}
