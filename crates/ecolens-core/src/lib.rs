// ABOUTME: Core types and constants for the EcoLens sustainability API
// ABOUTME: Foundation crate with error handling, domain models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `EcoLens` Core
//!
//! Foundation crate providing shared types and constants for the `EcoLens`
//! sustainability API. This crate changes rarely, so the server crate gets
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Domain constants (units, absorption rate, day count)
//! - **models**: Request/response domain models shared by every route

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Domain constants (units, tree absorption, month length)
pub mod constants;

/// Domain models (lifestyle input, footprint, simulation, products, challenges)
pub mod models;
