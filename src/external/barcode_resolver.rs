// ABOUTME: Ordered barcode fallback across product databases with per-provider timeouts
// ABOUTME: Provider errors and timeouts are logged and absorbed, never surfaced to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;

use super::{OpenFoodFactsClient, ProductLookup, UpcItemDbClient};
use crate::config::BarcodeLookupConfig;
use crate::logging::AppLogger;
use crate::models::ProductRecord;

/// Outcome of resolving a barcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarcodeResolution {
    /// A provider knew the product
    Found(ProductRecord),
    /// No provider knew the product, or none could be reached
    NotFound,
}

impl BarcodeResolution {
    /// The resolved record, if any
    #[must_use]
    pub const fn record(&self) -> Option<&ProductRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }

    /// Consume into the resolved record, if any
    #[must_use]
    pub fn into_record(self) -> Option<ProductRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }

    /// Whether a provider knew the product
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Sequential fallback chain over product databases
#[derive(Clone)]
pub struct BarcodeResolver {
    providers: Vec<Arc<dyn ProductLookup>>,
    timeout: Duration,
}

impl BarcodeResolver {
    /// Create a resolver trying `providers` in order, each bounded by `timeout`
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn ProductLookup>>, timeout: Duration) -> Self {
        Self { providers, timeout }
    }

    /// Open Food Facts first, then UPC Item DB
    #[must_use]
    pub fn from_config(client: &Client, config: &BarcodeLookupConfig) -> Self {
        Self::new(
            vec![
                Arc::new(OpenFoodFactsClient::new(
                    client.clone(),
                    config.open_food_facts_base_url.clone(),
                )),
                Arc::new(UpcItemDbClient::new(
                    client.clone(),
                    config.upc_item_db_base_url.clone(),
                )),
            ],
            config.timeout,
        )
    }

    /// Provider names in lookup order
    #[must_use]
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Resolve a barcode, stopping at the first provider that knows it
    ///
    /// A provider that errors or exceeds the timeout counts as not found and
    /// the next provider is still attempted.
    pub async fn resolve(&self, barcode: &str) -> BarcodeResolution {
        for provider in &self.providers {
            match timeout(self.timeout, provider.lookup(barcode)).await {
                Ok(Ok(Some(record))) => {
                    AppLogger::log_barcode_lookup(provider.name(), barcode, "found");
                    return BarcodeResolution::Found(record);
                }
                Ok(Ok(None)) => {
                    AppLogger::log_barcode_lookup(provider.name(), barcode, "not_found");
                }
                Ok(Err(error)) => {
                    AppLogger::log_barcode_failure(provider.name(), barcode, &error.message);
                }
                Err(_) => {
                    AppLogger::log_barcode_failure(
                        provider.name(),
                        barcode,
                        &format!("timed out after {}ms", self.timeout.as_millis()),
                    );
                }
            }
        }

        BarcodeResolution::NotFound
    }
}
