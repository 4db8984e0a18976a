// ABOUTME: Open Food Facts API client for food and beverage barcode lookups
// ABOUTME: Maps the product payload onto the shared product record with placeholder defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Open Food Facts client
//!
//! API reference: <https://openfoodfacts.github.io/openfoodfacts-server/api/>

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::placeholders::{
    NOT_APPLICABLE, NOT_AVAILABLE, NOT_SPECIFIED, UNKNOWN_BRAND, UNKNOWN_PRODUCT,
};
use super::{non_empty, or_placeholder, ProductLookup};
use crate::errors::{AppError, AppResult};
use crate::models::{ProductRecord, ProductSource};

/// `status` value meaning the product exists
const STATUS_FOUND: i64 = 1;

/// Product lookup response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenFoodFactsResponse {
    /// 1 when found, 0 otherwise
    #[serde(default)]
    pub status: Option<i64>,
    /// Product payload, present when found
    #[serde(default)]
    pub product: Option<OpenFoodFactsProduct>,
}

/// Fields of interest in an Open Food Facts product
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenFoodFactsProduct {
    /// Product name
    pub product_name: Option<String>,
    /// Comma-separated brands
    pub brands: Option<String>,
    /// Comma-separated categories
    pub categories: Option<String>,
    /// Ingredient list
    pub ingredients_text: Option<String>,
    /// Packaging description
    pub packaging: Option<String>,
    /// Quality labels
    pub labels: Option<String>,
    /// Nutri-Score grade
    pub nutriscore_grade: Option<String>,
    /// Eco-Score grade
    pub ecoscore_grade: Option<String>,
    /// Front image
    pub image_url: Option<String>,
}

impl OpenFoodFactsResponse {
    /// Normalize into a product record, `None` when the product is unknown
    #[must_use]
    pub fn into_record(self) -> Option<ProductRecord> {
        if self.status != Some(STATUS_FOUND) {
            return None;
        }
        let product = self.product?;

        Some(ProductRecord {
            source: ProductSource::OpenFoodFacts,
            name: or_placeholder(product.product_name, UNKNOWN_PRODUCT),
            brand: or_placeholder(product.brands, UNKNOWN_BRAND),
            categories: or_placeholder(product.categories, NOT_APPLICABLE),
            ingredients: Some(or_placeholder(product.ingredients_text, NOT_AVAILABLE)),
            packaging: Some(or_placeholder(product.packaging, NOT_SPECIFIED)),
            labels: non_empty(product.labels),
            nutriscore: Some(or_placeholder(product.nutriscore_grade, NOT_APPLICABLE)),
            ecoscore: Some(or_placeholder(product.ecoscore_grade, NOT_APPLICABLE)),
            description: None,
            image_url: non_empty(product.image_url),
        })
    }
}

/// Open Food Facts REST client
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    client: Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    /// Create a client against a REST root such as `https://world.openfoodfacts.org`
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn product_url(&self, barcode: &str) -> String {
        format!(
            "{}/api/v0/product/{}.json",
            self.base_url,
            urlencoding::encode(barcode)
        )
    }
}

#[async_trait]
impl ProductLookup for OpenFoodFactsClient {
    fn name(&self) -> &'static str {
        ProductSource::OpenFoodFacts.as_str()
    }

    async fn lookup(&self, barcode: &str) -> AppResult<Option<ProductRecord>> {
        let url = self.product_url(barcode);
        debug!(url = %url, "Querying Open Food Facts");

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::external_unavailable(self.name(), format!("request failed: {e}"))
                .with_source(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                self.name(),
                format!("unexpected status {status}"),
            ));
        }

        let body: OpenFoodFactsResponse = response.json().await.map_err(|e| {
            AppError::external_service(self.name(), format!("malformed response: {e}"))
                .with_source(e)
        })?;

        Ok(body.into_record())
    }
}
