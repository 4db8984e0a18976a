// ABOUTME: Centralized resource container for dependency injection into route handlers
// ABOUTME: Holds configuration, the AI provider, the barcode resolver, and the emission factor table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Everything a handler needs is built once at startup and shared read-only
//! through `Arc<ServerResources>`. Nothing here is mutated after construction,
//! so requests never coordinate with each other.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::external::BarcodeResolver;
use crate::footprint::EmissionFactors;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::utils::http_client::lookup_client;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Generative AI provider used by every advice route
    pub llm: Arc<dyn LlmProvider>,
    /// Barcode lookup fallback chain
    pub barcode_resolver: BarcodeResolver,
    /// Emission factor table
    pub emission_factors: EmissionFactors,
}

impl ServerResources {
    /// Assemble resources from explicit parts
    #[must_use]
    pub fn new(
        config: ServerConfig,
        llm: Arc<dyn LlmProvider>,
        barcode_resolver: BarcodeResolver,
    ) -> Self {
        Self {
            config: Arc::new(config),
            llm,
            barcode_resolver,
            emission_factors: EmissionFactors::STANDARD,
        }
    }

    /// Build the production resources: Gemini plus both barcode databases
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let llm: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::new(&config.gemini));
        let barcode_resolver =
            BarcodeResolver::from_config(&lookup_client(&config.barcode), &config.barcode);
        Self::new(config, llm, barcode_resolver)
    }
}
