// ABOUTME: Emission factor table converting activity quantities into kg CO₂
// ABOUTME: One immutable table built at startup and shared read-only by every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{FoodHabit, ShoppingFrequency, TransportMode};

/// kg CO₂ per km for each commute mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportFactors {
    /// Private car
    pub car: f64,
    /// Bicycle
    pub bike: f64,
    /// Bus, metro, train
    pub public_transport: f64,
    /// Walking
    pub walking: f64,
}

/// kg CO₂ per day for each diet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodFactors {
    /// Vegetarian
    pub veg: f64,
    /// Meat-heavy
    pub non_veg: f64,
    /// Plant-based
    pub vegan: f64,
    /// Mixed
    pub mixed: f64,
}

/// kg CO₂ per month for each shopping frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoppingFactors {
    /// Rarely
    pub low: f64,
    /// Average
    pub medium: f64,
    /// Often
    pub high: f64,
}

/// Complete coefficient table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactors {
    /// Per km
    pub transport: TransportFactors,
    /// Per kWh
    pub electricity_per_kwh: f64,
    /// Per day
    pub food: FoodFactors,
    /// Per month
    pub shopping: ShoppingFactors,
    /// Per daily device hour, per day
    pub device_per_hour: f64,
}

impl EmissionFactors {
    /// Published coefficients used by the EcoLens calculator
    pub const STANDARD: Self = Self {
        transport: TransportFactors {
            car: 0.21,
            bike: 0.0,
            public_transport: 0.089,
            walking: 0.0,
        },
        electricity_per_kwh: 0.85,
        food: FoodFactors {
            veg: 1.5,
            non_veg: 7.2,
            vegan: 1.0,
            mixed: 4.0,
        },
        shopping: ShoppingFactors {
            low: 10.0,
            medium: 30.0,
            high: 60.0,
        },
        device_per_hour: 0.5,
    };

    /// kg CO₂ per km for a mode
    #[must_use]
    pub const fn transport_per_km(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Car => self.transport.car,
            TransportMode::Bike => self.transport.bike,
            TransportMode::PublicTransport => self.transport.public_transport,
            TransportMode::Walking => self.transport.walking,
        }
    }

    /// kg CO₂ per day for a diet
    #[must_use]
    pub const fn food_per_day(&self, habit: FoodHabit) -> f64 {
        match habit {
            FoodHabit::Veg => self.food.veg,
            FoodHabit::NonVeg => self.food.non_veg,
            FoodHabit::Vegan => self.food.vegan,
            FoodHabit::Mixed => self.food.mixed,
        }
    }

    /// kg CO₂ per month for a shopping frequency
    #[must_use]
    pub const fn shopping_per_month(&self, frequency: ShoppingFrequency) -> f64 {
        match frequency {
            ShoppingFrequency::Low => self.shopping.low,
            ShoppingFrequency::Medium => self.shopping.medium,
            ShoppingFrequency::High => self.shopping.high,
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::STANDARD
    }
}
