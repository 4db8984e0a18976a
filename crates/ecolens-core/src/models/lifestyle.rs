// ABOUTME: Lifestyle input model submitted for carbon footprint estimation
// ABOUTME: Transport, electricity, food, and lifestyle habits with strictly validated enum keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Primary commute mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum TransportMode {
    /// Private car
    Car,
    /// Bicycle (zero emission)
    Bike,
    /// Bus, metro, train
    PublicTransport,
    /// Walking (zero emission)
    Walking,
}

impl TransportMode {
    /// Wire name of the mode
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::PublicTransport => "publicTransport",
            Self::Walking => "walking",
        }
    }

    /// Human-powered modes never emit transport CO₂
    #[must_use]
    pub const fn is_zero_emission(&self) -> bool {
        matches!(self, Self::Bike | Self::Walking)
    }
}

impl FromStr for TransportMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "publicTransport" => Ok(Self::PublicTransport),
            "walking" => Ok(Self::Walking),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized transport mode '{other}' (expected car, bike, publicTransport or walking)"
            ))),
        }
    }
}

/// Dietary habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum FoodHabit {
    /// Vegetarian
    Veg,
    /// Meat-heavy
    NonVeg,
    /// Fully plant-based
    Vegan,
    /// Mixed diet
    Mixed,
}

impl FoodHabit {
    /// Wire name of the habit
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "nonVeg",
            Self::Vegan => "vegan",
            Self::Mixed => "mixed",
        }
    }
}

impl FromStr for FoodHabit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(Self::Veg),
            "nonVeg" => Ok(Self::NonVeg),
            "vegan" => Ok(Self::Vegan),
            "mixed" => Ok(Self::Mixed),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized food habit '{other}' (expected veg, nonVeg, vegan or mixed)"
            ))),
        }
    }
}

/// How often the user shops for new goods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum ShoppingFrequency {
    /// Rarely buys new items
    Low,
    /// Average consumer
    Medium,
    /// Frequent shopper
    High,
}

impl ShoppingFrequency {
    /// Wire name of the frequency
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for ShoppingFrequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized shopping frequency '{other}' (expected low, medium or high)"
            ))),
        }
    }
}

macro_rules! wire_enum_conversions {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = AppError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

wire_enum_conversions!(TransportMode, FoodHabit, ShoppingFrequency);

/// Daily commute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportInput {
    /// Commute mode
    pub mode: TransportMode,
    /// Kilometres travelled per day
    pub distance_per_day: f64,
}

/// Household electricity use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricityInput {
    /// kWh consumed per month
    pub units_per_month: f64,
}

/// Diet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodInput {
    /// Dietary habit
    pub habit: FoodHabit,
}

/// Consumption habits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleHabits {
    /// Shopping frequency
    pub shopping_frequency: ShoppingFrequency,
    /// Hours of device use per day
    pub device_hours: f64,
}

/// Complete lifestyle questionnaire, immutable for the lifetime of a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleInput {
    /// Commute
    pub transport: TransportInput,
    /// Electricity
    pub electricity: ElectricityInput,
    /// Diet
    pub food: FoodInput,
    /// Shopping and devices
    pub lifestyle: LifestyleHabits,
}

impl LifestyleInput {
    /// Check that every quantity is a finite, non-negative number
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<(), AppError> {
        let quantities = [
            ("transport.distancePerDay", self.transport.distance_per_day),
            ("electricity.unitsPerMonth", self.electricity.units_per_month),
            ("lifestyle.deviceHours", self.lifestyle.device_hours),
        ];

        for (field, value) in quantities {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
