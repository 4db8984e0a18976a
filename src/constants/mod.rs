// ABOUTME: Server constants grouped by domain: environment variable names and their defaults
// ABOUTME: Domain constants (units, absorption rate) live in the core crate and are re-exported here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Environment variable names and defaults used by the configuration loader,
//! plus re-exports of the domain constants from `ecolens_core`.

pub use ecolens_core::constants::{plant_mood, sequestration, service_names, units};

/// Environment variable names
pub mod env_vars {
    /// HTTP listening port
    pub const PORT: &str = "PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Generative service API key
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Model used for text and vision calls
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Generative service root URL
    pub const GEMINI_API_BASE_URL: &str = "GEMINI_API_BASE_URL";
    /// Bound on every AI call, in seconds
    pub const AI_REQUEST_TIMEOUT_SECS: &str = "AI_REQUEST_TIMEOUT_SECS";
    /// Bound on each barcode provider call, in seconds
    pub const BARCODE_LOOKUP_TIMEOUT_SECS: &str = "BARCODE_LOOKUP_TIMEOUT_SECS";
    /// Open Food Facts root URL
    pub const OPEN_FOOD_FACTS_BASE_URL: &str = "OPEN_FOOD_FACTS_BASE_URL";
    /// UPC Item DB root URL
    pub const UPC_ITEM_DB_BASE_URL: &str = "UPC_ITEM_DB_BASE_URL";
    /// Comma-separated CORS origin allow-list
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Maximum accepted request body size
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const PORT: u16 = 5000;

    /// Default bind address
    pub const HOST: &str = "0.0.0.0";

    /// Default model for text and vision generation
    pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

    /// Default Gemini REST root
    pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// AI calls are abandoned after this many seconds
    pub const AI_REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Each barcode provider gets this many seconds before it counts as not found
    pub const BARCODE_LOOKUP_TIMEOUT_SECS: u64 = 5;

    /// Open Food Facts REST root
    pub const OPEN_FOOD_FACTS_BASE_URL: &str = "https://world.openfoodfacts.org";

    /// UPC Item DB REST root
    pub const UPC_ITEM_DB_BASE_URL: &str = "https://api.upcitemdb.com";

    /// 50MB, large enough for inline product photos
    pub const MAX_REQUEST_BODY_BYTES: usize = 52_428_800;

    /// Web front-ends allowed to call the API
    pub const CORS_ALLOWED_ORIGINS: &[&str] = &[
        "https://ecohub-8c7zal6ra-aiswaryas-projects-5149c194.vercel.app",
        "https://ecohub-h8e8v0j9r-aiswaryas-projects-5149c194.vercel.app",
        "https://ecohub-qokgw3q1a-aiswaryas-projects-5149c194.vercel.app",
        "https://ecohub-nine.vercel.app",
        "https://ecohub.vercel.app",
        "http://localhost:3000",
    ];
}

/// Model probe defaults
pub mod probe {
    /// Models tried when no `--model` is given
    pub const CANDIDATE_MODELS: &[&str] = &[
        "gemini-2.5-flash-lite",
        "gemini-2.5-flash",
        "gemini-1.5-flash-8b",
        "gemini-1.5-flash",
    ];

    /// One-word prompt sent to each candidate
    pub const TEST_PROMPT: &str = "Test";
}
