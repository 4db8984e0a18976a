// ABOUTME: Prompt builders for footprint advice, product analysis, plant companion, and climate education
// ABOUTME: Templates are loaded at compile time from markdown files and filled by pure functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Every advisory task has one pure builder taking a typed context and
//! returning an immutable [`Prompt`]. Templates live next to this module as
//! markdown and are embedded with `include_str!`, so prompt wording can be
//! reviewed without reading Rust.

mod advice;
mod companion;
mod education;
mod product;

pub use advice::footprint_advice;
pub use companion::companion_message;
pub use education::climate_education;
pub use product::{product_eco_analysis, ProductAnalysisContext};

use super::{ChatMessage, ChatRequest, ImageAttachment};

/// Advisory task a prompt was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTask {
    /// Personalized footprint reduction advice
    FootprintAdvice,
    /// Product sustainability and disposal analysis
    ProductEcoAnalysis,
    /// Plant companion greeting
    CompanionGreeting,
    /// Plant companion celebration of a completed action
    CompanionCelebration,
    /// Plant companion nudge when nothing was done today
    CompanionReminder,
    /// Plain-language climate question answer
    ClimateEducation,
}

impl PromptTask {
    /// Stable name used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FootprintAdvice => "footprint-advice",
            Self::ProductEcoAnalysis => "product-eco-analysis",
            Self::CompanionGreeting => "companion-greeting",
            Self::CompanionCelebration => "companion-celebration",
            Self::CompanionReminder => "companion-reminder",
            Self::ClimateEducation => "climate-education",
        }
    }
}

/// Instruction text for the generative service, with an optional image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Task the prompt was built for
    pub task: PromptTask,
    /// Natural-language instructions
    pub text: String,
    /// Image analyzed alongside the text
    pub image: Option<ImageAttachment>,
}

impl Prompt {
    /// Text-only prompt
    #[must_use]
    pub const fn text(task: PromptTask, text: String) -> Self {
        Self {
            task,
            text,
            image: None,
        }
    }

    /// Convert into a single-message completion request
    #[must_use]
    pub fn into_request(self) -> ChatRequest {
        let message = ChatMessage::user(self.text);
        let message = match self.image {
            Some(image) => message.with_image(image),
            None => message,
        };
        ChatRequest::new(vec![message])
    }
}

/// Fill `{{name}}` placeholders in one pass
///
/// Substituted values are never rescanned, so user text containing braces is
/// inserted verbatim. Unknown placeholders are left as they are.
pub(crate) fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len() + 256);
    let mut rest = template.trim_end();

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &after_open[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => output.push_str(value),
            None => {
                output.push_str("{{");
                output.push_str(key);
                output.push_str("}}");
            }
        }
        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}
