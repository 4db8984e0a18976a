// ABOUTME: Plant companion message kinds and mood derived from cumulative savings
// ABOUTME: Mood thresholds are strict greater-than comparisons on kg CO₂ saved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::plant_mood::{GROWING_ABOVE_KG, HAPPY_ABOVE_KG, THRIVING_ABOVE_KG};
use crate::errors::AppError;

/// Kind of companion message requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CompanionMessageType {
    /// App opened
    Greeting,
    /// Sustainable action just completed
    Celebration,
    /// No action taken today
    Reminder,
}

impl CompanionMessageType {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Celebration => "celebration",
            Self::Reminder => "reminder",
        }
    }
}

impl FromStr for CompanionMessageType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greeting" => Ok(Self::Greeting),
            "celebration" => Ok(Self::Celebration),
            "reminder" => Ok(Self::Reminder),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized message type '{other}' (expected greeting, celebration or reminder)"
            ))),
        }
    }
}

impl TryFrom<String> for CompanionMessageType {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Companion plant mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantMood {
    /// More than 50 kg saved
    Thriving,
    /// More than 20 kg saved
    Happy,
    /// More than 5 kg saved
    Growing,
    /// Everything else
    Neutral,
}

impl PlantMood {
    /// Derive the mood from cumulative kg CO₂ saved
    #[must_use]
    pub fn from_total_saved(total_saved: f64) -> Self {
        if total_saved > THRIVING_ABOVE_KG {
            Self::Thriving
        } else if total_saved > HAPPY_ABOVE_KG {
            Self::Happy
        } else if total_saved > GROWING_ABOVE_KG {
            Self::Growing
        } else {
            Self::Neutral
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Thriving => "thriving",
            Self::Happy => "happy",
            Self::Growing => "growing",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for PlantMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
