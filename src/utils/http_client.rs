// ABOUTME: HTTP client construction with connection pooling and timeout configuration
// ABOUTME: One pooled client per outbound concern: barcode providers and the AI service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::config::{BarcodeLookupConfig, GeminiConfig};
use crate::constants::service_names;

/// Connection establishment bound shared by every outbound client
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_client_with_timeout(timeout: Duration, connect_timeout: Duration) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout.min(timeout))
        .user_agent(concat!("ecolens-server/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Client for the barcode databases, bounded by the lookup timeout
#[must_use]
pub fn lookup_client(config: &BarcodeLookupConfig) -> Client {
    tracing::debug!(
        service = service_names::ECOLENS_SERVER,
        timeout_secs = config.timeout.as_secs(),
        "Building barcode lookup HTTP client"
    );
    create_client_with_timeout(config.timeout, CONNECT_TIMEOUT)
}

/// Client for the generative AI service, bounded by the AI request timeout
#[must_use]
pub fn ai_client(config: &GeminiConfig) -> Client {
    create_client_with_timeout(config.request_timeout, CONNECT_TIMEOUT)
}
