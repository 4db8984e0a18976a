// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides mock AI and barcode providers plus ready-made server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `ecolens_server`
//!
//! External collaborators are replaced with in-process mocks so tests never
//! touch the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use ecolens_server::{
    config::ServerConfig,
    errors::{AppError, AppResult, ErrorCode},
    external::{BarcodeResolver, ProductLookup},
    llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, ModelInfo},
    models::{ProductRecord, ProductSource},
    resources::ServerResources,
    server::EcoLensServer,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Absolute tolerance for floating-point comparisons
pub const EPSILON: f64 = 1e-9;

/// Assert two floats are equal within [`EPSILON`]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Mock AI provider
// ============================================================================

/// AI provider that echoes the prompt back and records every request
pub struct MockLlm {
    capabilities: LlmCapabilities,
    failure: Option<(ErrorCode, String)>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockLlm {
    /// Vision-capable provider that always succeeds
    pub fn new() -> Self {
        Self {
            capabilities: LlmCapabilities::multimodal(),
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider without image support
    pub fn text_only() -> Self {
        Self {
            capabilities: LlmCapabilities::text_only(),
            ..Self::new()
        }
    }

    /// Provider whose every call fails with the given error
    pub fn failing(code: ErrorCode, message: &str) -> Self {
        Self {
            failure: Some((code, message.to_owned())),
            ..Self::new()
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Text of the most recent prompt
    pub fn last_prompt(&self) -> String {
        let requests = self.requests.lock().unwrap();
        let request = requests.last().expect("no request was sent");
        request.messages[0].content.clone()
    }
}

impl Default for MockLlm {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmProvider for MockLlm {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock LLM"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some((code, message)) = &self.failure {
            return Err(AppError::new(*code, message.clone()));
        }

        let prompt = request
            .messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        Ok(ChatResponse {
            content: format!("generated for: {}", prompt.lines().next().unwrap_or_default()),
            model: "mock-model".to_owned(),
            finish_reason: Some("STOP".to_owned()),
        })
    }

    async fn list_models(&self) -> AppResult<Vec<ModelInfo>> {
        if let Some((code, message)) = &self.failure {
            return Err(AppError::new(*code, message.clone()));
        }
        Ok(vec![
            ModelInfo {
                name: "models/mock-model".to_owned(),
                display_name: "Mock Model".to_owned(),
            },
            ModelInfo {
                name: "models/mock-vision".to_owned(),
                display_name: "Mock Vision".to_owned(),
            },
        ])
    }
}

// ============================================================================
// Mock barcode providers
// ============================================================================

/// How a mock barcode provider answers
#[derive(Clone)]
pub enum LookupBehavior {
    /// Returns the record
    Found(ProductRecord),
    /// Reports the barcode as unknown
    NotFound,
    /// Fails with an external service error
    Fail,
    /// Sleeps, then returns the record
    Slow(Duration, ProductRecord),
}

/// Barcode provider with scripted behavior and a call counter
pub struct MockLookup {
    name: &'static str,
    behavior: LookupBehavior,
    calls: AtomicUsize,
}

impl MockLookup {
    /// Create a provider
    pub fn new(name: &'static str, behavior: LookupBehavior) -> Arc<Self> {
        Arc::new(Self {
            name,
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of lookups received
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductLookup for MockLookup {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn lookup(&self, _barcode: &str) -> AppResult<Option<ProductRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            LookupBehavior::Found(record) => Ok(Some(record.clone())),
            LookupBehavior::NotFound => Ok(None),
            LookupBehavior::Fail => Err(AppError::external_service(self.name, "HTTP 502")),
            LookupBehavior::Slow(delay, record) => {
                tokio::time::sleep(*delay).await;
                Ok(Some(record.clone()))
            }
        }
    }
}

/// Resolver over the given providers with a short timeout
pub fn resolver(providers: Vec<Arc<MockLookup>>, timeout: Duration) -> BarcodeResolver {
    BarcodeResolver::new(
        providers
            .into_iter()
            .map(|p| p as Arc<dyn ProductLookup>)
            .collect(),
        timeout,
    )
}

// ============================================================================
// Fixtures
// ============================================================================

/// Fully populated Open Food Facts record
pub fn food_record() -> ProductRecord {
    ProductRecord {
        source: ProductSource::OpenFoodFacts,
        name: "Organic Oat Drink".to_owned(),
        brand: "Oatly".to_owned(),
        categories: "Plant-based beverages".to_owned(),
        ingredients: Some("Water, oats 10%, rapeseed oil".to_owned()),
        packaging: Some("Tetra Pak".to_owned()),
        labels: None,
        nutriscore: Some("b".to_owned()),
        ecoscore: Some("a".to_owned()),
        description: None,
        image_url: Some("https://images.example/oat.jpg".to_owned()),
    }
}

/// UPC Item DB record for general merchandise
pub fn merchandise_record() -> ProductRecord {
    ProductRecord {
        source: ProductSource::UpcItemDb,
        name: "Stainless Steel Water Bottle".to_owned(),
        brand: "Hydro".to_owned(),
        categories: "Kitchen & Dining".to_owned(),
        ingredients: None,
        packaging: None,
        labels: None,
        nutriscore: None,
        ecoscore: None,
        description: Some("Insulated 750ml bottle".to_owned()),
        image_url: None,
    }
}

/// Configuration that needs no environment
pub fn test_config() -> ServerConfig {
    ServerConfig::default()
}

/// Resources over a mock AI provider and a resolver that finds nothing
pub fn test_resources(llm: Arc<MockLlm>) -> Arc<ServerResources> {
    test_resources_with_resolver(llm, resolver(Vec::new(), Duration::from_millis(100)))
}

/// Resources over a mock AI provider and the given resolver
pub fn test_resources_with_resolver(
    llm: Arc<MockLlm>,
    barcode_resolver: BarcodeResolver,
) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        test_config(),
        llm as Arc<dyn LlmProvider>,
        barcode_resolver,
    ))
}

/// Complete application router over the given resources
pub fn app(resources: Arc<ServerResources>) -> Router {
    EcoLensServer::new(resources).router()
}
