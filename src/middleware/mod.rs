// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Provides CORS setup, request ID generation, and per-request spans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{
    create_request_span, propagate_request_id_layer, set_request_id_layer, trace_layer,
    RequestSpan, REQUEST_ID_HEADER,
};
