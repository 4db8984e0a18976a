// ABOUTME: Main library entry point for the EcoLens sustainability API
// ABOUTME: Carbon footprint estimation, barcode product lookup, and AI-generated sustainability advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `EcoLens` Server
//!
//! Backend-for-frontend of the `EcoLens+` web app. It estimates a monthly
//! carbon footprint from lifestyle answers, projects the effect of proposed
//! reductions, looks products up by barcode, and asks a generative AI service
//! for advice, product analysis, plant companion messages, and climate answers.
//!
//! ## Architecture
//!
//! - **Footprint**: pure calculator and simulator over a constant factor table
//! - **External**: barcode providers chained behind one resolver
//! - **LLM**: provider trait, Gemini client, and pure prompt builders
//! - **Routes**: one thin route struct per capability
//! - **Server**: router assembly, middleware, and graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use ecolens_server::config::ServerConfig;
//! use ecolens_server::errors::AppResult;
//! use ecolens_server::resources::ServerResources;
//! use ecolens_server::server::EcoLensServer;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config));
//!     EcoLensServer::new(resources).run().await
//! }
//! ```

// ── Re-exports from ecolens-core ────────────────────────────────────────

/// Unified error handling (re-exported from `ecolens-core`)
pub use ecolens_core::errors;

/// Domain models (re-exported from `ecolens-core`)
pub use ecolens_core::models;

// ── Public API ──────────────────────────────────────────────────────────

/// Static challenge catalog
pub mod challenges;

/// Environment configuration
pub mod config;

/// Environment variable names, defaults, and domain constants
pub mod constants;

/// Barcode product database clients and the fallback resolver
pub mod external;

/// Footprint calculation and impact simulation
pub mod footprint;

/// Generative AI provider abstraction and prompt builders
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Shared per-process resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;

/// HTTP client construction
pub mod utils;
