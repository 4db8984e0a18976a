// ABOUTME: Static catalog of predefined eco challenges served by the challenges route
// ABOUTME: Defined once at compile time and never mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{Challenge, ChallengeCategory, ChallengeDifficulty, ChallengeDuration};

use ChallengeCategory::{Electricity, Food, Lifestyle, Transport};
use ChallengeDifficulty::{Easy, Hard, Medium};
use ChallengeDuration::{Monthly, Weekly};

/// Every challenge offered to users, in display order
pub const CHALLENGES: [Challenge; 8] = [
    Challenge {
        id: 1,
        title: "Public Transport Tuesday",
        description: "Use public transport or carpool twice this week",
        co2_saved: 18,
        difficulty: Easy,
        category: Transport,
        duration: Weekly,
        points: 15,
    },
    Challenge {
        id: 2,
        title: "Meatless Monday",
        description: "Go vegetarian for one day each week",
        co2_saved: 12,
        difficulty: Easy,
        category: Food,
        duration: Weekly,
        points: 10,
    },
    Challenge {
        id: 3,
        title: "Energy Saver",
        description: "Reduce electricity usage by 20% this month",
        co2_saved: 25,
        difficulty: Medium,
        category: Electricity,
        duration: Monthly,
        points: 25,
    },
    Challenge {
        id: 4,
        title: "Zero Waste Weekend",
        description: "Avoid single-use plastics for 2 days",
        co2_saved: 8,
        difficulty: Medium,
        category: Lifestyle,
        duration: Weekly,
        points: 20,
    },
    Challenge {
        id: 5,
        title: "Eco Shopper",
        description: "Buy only second-hand or sustainable products this month",
        co2_saved: 30,
        difficulty: Hard,
        category: Lifestyle,
        duration: Monthly,
        points: 40,
    },
    Challenge {
        id: 6,
        title: "Bike Week",
        description: "Cycle or walk for all short trips (under 5km)",
        co2_saved: 22,
        difficulty: Medium,
        category: Transport,
        duration: Weekly,
        points: 20,
    },
    Challenge {
        id: 7,
        title: "Reusable Revolution",
        description: "Use reusable bags, bottles, and containers all week",
        co2_saved: 15,
        difficulty: Easy,
        category: Lifestyle,
        duration: Weekly,
        points: 12,
    },
    Challenge {
        id: 8,
        title: "Digital Detox",
        description: "Reduce screen time by 2 hours daily to save energy",
        co2_saved: 10,
        difficulty: Medium,
        category: Electricity,
        duration: Weekly,
        points: 18,
    },
];
