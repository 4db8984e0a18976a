// ABOUTME: Configuration module for the EcoLens server
// ABOUTME: Environment-driven settings for binding, AI service access, lookups, and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management

/// Environment variable loading and validation
pub mod environment;

pub use environment::{BarcodeLookupConfig, CorsConfig, Environment, GeminiConfig, ServerConfig};
