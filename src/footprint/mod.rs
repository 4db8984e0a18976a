// ABOUTME: Carbon footprint estimation and future impact projection
// ABOUTME: Pure, allocation-light functions over the shared emission factor table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Footprint
//!
//! - [`calculate_footprint`] turns a lifestyle questionnaire into a monthly
//!   estimate with a per-category breakdown.
//! - [`simulate_impact`] projects how a set of proposed reductions changes the
//!   monthly, yearly, and tree-equivalent figures.
//!
//! Both are pure: identical input always yields identical output.

/// Monthly footprint calculation
pub mod calculator;
/// Coefficient table
pub mod factors;
/// Savings projection
pub mod simulator;

pub use calculator::{calculate_footprint, category_emissions};
pub use factors::EmissionFactors;
pub use simulator::{impact_band, simulate_impact, total_savings};
