// ABOUTME: Route module organization for the EcoLens HTTP endpoints
// ABOUTME: One route struct per capability, each owning its request and response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the `EcoLens` API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the calculator, the barcode resolver, and the
//! prompt builders. Every handler returns `Result<Response, AppError>`, so all
//! failures share one JSON error envelope.

/// Footprint reduction advice
pub mod advice;
/// Climate awareness chat
pub mod awareness;
/// Static challenge catalog
pub mod challenges;
/// Plant companion messages
pub mod ecobloom;
/// Product sustainability analysis
pub mod ecoscan;
/// JSON body extraction with envelope-shaped rejections
pub mod extract;
/// Footprint calculation and impact simulation
pub mod footprint;
/// Health check and model catalog
pub mod health;

pub use advice::AdviceRoutes;
pub use awareness::AwarenessRoutes;
pub use challenges::ChallengeRoutes;
pub use ecobloom::EcoBloomRoutes;
pub use ecoscan::EcoScanRoutes;
pub use extract::JsonBody;
pub use footprint::FootprintRoutes;
pub use health::HealthRoutes;
