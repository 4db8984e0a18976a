// ABOUTME: Domain constants shared by the footprint calculator and impact simulator
// ABOUTME: Units, month length, and the tree absorption rate used for equivalences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain constants

/// Footprint unit constants
pub mod units {
    /// Unit label attached to every footprint result
    pub const FOOTPRINT_UNIT: &str = "kg CO₂/month";

    /// Days in a footprint month (daily activities are scaled by this)
    pub const DAYS_PER_MONTH: f64 = 30.0;

    /// Months in a year, used for yearly projections
    pub const MONTHS_PER_YEAR: f64 = 12.0;
}

/// Carbon sequestration constants
pub mod sequestration {
    /// kg of CO₂ absorbed by one tree in one year
    pub const TREE_ABSORPTION_KG_PER_YEAR: f64 = 21.0;
}

/// Companion plant mood thresholds (kg CO₂ saved, strictly greater-than)
pub mod plant_mood {
    /// Above this total the plant is thriving
    pub const THRIVING_ABOVE_KG: f64 = 50.0;

    /// Above this total the plant is happy
    pub const HAPPY_ABOVE_KG: f64 = 20.0;

    /// Above this total the plant is growing
    pub const GROWING_ABOVE_KG: f64 = 5.0;

    /// Stage reported when the client does not send one
    pub const DEFAULT_PLANT_STAGE: &str = "seedling";
}

/// Service identity
pub mod service_names {
    /// Service name used in logs and health responses
    pub const ECOLENS_SERVER: &str = "ecolens-server";

    /// Human-readable service name
    pub const ECOLENS_DISPLAY_NAME: &str = "EcoLens+ API";
}
