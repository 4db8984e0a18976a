// ABOUTME: Shared utilities for outbound HTTP access
// ABOUTME: Houses client builders used by the barcode lookups and the AI provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Outbound HTTP client builders
pub mod http_client;
