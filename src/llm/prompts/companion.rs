// ABOUTME: Plant companion prompts keyed by message type
// ABOUTME: Greeting and reminder are fixed; celebration names the last action and total saved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{render, Prompt, PromptTask};
use crate::models::CompanionMessageType;

const GREETING: &str = include_str!("companion_greeting.md");
const CELEBRATION: &str = include_str!("companion_celebration.md");
const REMINDER: &str = include_str!("companion_reminder.md");

/// Used when a celebration arrives without an action description
const UNNAMED_ACTION: &str = "a sustainable action";

/// Build the companion prompt for a message type
///
/// `last_action` and `total_saved` only shape the celebration prompt.
#[must_use]
pub fn companion_message(
    message_type: CompanionMessageType,
    last_action: Option<&str>,
    total_saved: f64,
) -> Prompt {
    match message_type {
        CompanionMessageType::Greeting => {
            Prompt::text(PromptTask::CompanionGreeting, render(GREETING, &[]))
        }
        CompanionMessageType::Celebration => {
            let action = last_action
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .unwrap_or(UNNAMED_ACTION);
            let total_saved = total_saved.to_string();
            Prompt::text(
                PromptTask::CompanionCelebration,
                render(
                    CELEBRATION,
                    &[("last_action", action), ("total_saved", total_saved.as_str())],
                ),
            )
        }
        CompanionMessageType::Reminder => {
            Prompt::text(PromptTask::CompanionReminder, render(REMINDER, &[]))
        }
    }
}
