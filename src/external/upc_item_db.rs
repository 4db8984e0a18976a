// ABOUTME: UPC Item DB client for general merchandise barcode lookups
// ABOUTME: Uses the free trial endpoint and keeps the first matching item
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::placeholders::{NOT_APPLICABLE, NOT_AVAILABLE, UNKNOWN_BRAND, UNKNOWN_PRODUCT};
use super::{non_empty, or_placeholder, ProductLookup};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{ProductRecord, ProductSource};

/// Trial lookup response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpcItemDbResponse {
    /// Matching items, best match first
    #[serde(default)]
    pub items: Vec<UpcItem>,
}

/// One catalog item
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpcItem {
    /// Listing title
    pub title: Option<String>,
    /// Brand
    pub brand: Option<String>,
    /// Category path
    pub category: Option<String>,
    /// Listing description
    pub description: Option<String>,
    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
}

impl UpcItemDbResponse {
    /// Normalize the first item, `None` when there are no items
    #[must_use]
    pub fn into_record(self) -> Option<ProductRecord> {
        let item = self.items.into_iter().next()?;

        Some(ProductRecord {
            source: ProductSource::UpcItemDb,
            name: or_placeholder(item.title, UNKNOWN_PRODUCT),
            brand: or_placeholder(item.brand, UNKNOWN_BRAND),
            categories: or_placeholder(item.category, NOT_APPLICABLE),
            ingredients: None,
            packaging: None,
            labels: None,
            nutriscore: None,
            ecoscore: None,
            description: Some(or_placeholder(item.description, NOT_AVAILABLE)),
            image_url: non_empty(item.images.into_iter().next()),
        })
    }
}

/// UPC Item DB REST client
#[derive(Debug, Clone)]
pub struct UpcItemDbClient {
    client: Client,
    base_url: String,
}

impl UpcItemDbClient {
    /// Create a client against a REST root such as `https://api.upcitemdb.com`
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn lookup_url(&self, barcode: &str) -> String {
        format!(
            "{}/prod/trial/lookup?upc={}",
            self.base_url,
            urlencoding::encode(barcode)
        )
    }
}

#[async_trait]
impl ProductLookup for UpcItemDbClient {
    fn name(&self) -> &'static str {
        ProductSource::UpcItemDb.as_str()
    }

    async fn lookup(&self, barcode: &str) -> AppResult<Option<ProductRecord>> {
        let url = self.lookup_url(barcode);
        debug!(url = %url, "Querying UPC Item DB");

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::external_unavailable(self.name(), format!("request failed: {e}"))
                .with_source(e)
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(AppError::new(
                    ErrorCode::ExternalRateLimited,
                    format!("{}: daily trial quota exhausted", self.name()),
                ));
            }
            status if !status.is_success() => {
                return Err(AppError::external_service(
                    self.name(),
                    format!("unexpected status {status}"),
                ));
            }
            _ => {}
        }

        let body: UpcItemDbResponse = response.json().await.map_err(|e| {
            AppError::external_service(self.name(), format!("malformed response: {e}"))
                .with_source(e)
        })?;

        Ok(body.into_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_item_is_normalized() {
        let response: UpcItemDbResponse = serde_json::from_value(json!({
            "code": "OK",
            "items": [
                {
                    "title": "Steel Water Bottle",
                    "brand": "Hydra",
                    "images": ["https://img.example/1.jpg", "https://img.example/2.jpg"]
                },
                { "title": "Second match" }
            ]
        }))
        .unwrap();

        let record = response.into_record().unwrap();
        assert_eq!(record.source, ProductSource::UpcItemDb);
        assert_eq!(record.name, "Steel Water Bottle");
        assert_eq!(record.brand, "Hydra");
        assert_eq!(record.categories, "N/A");
        assert_eq!(record.description.as_deref(), Some("Not available"));
        assert_eq!(record.ingredients, None);
        assert_eq!(record.image_url.as_deref(), Some("https://img.example/1.jpg"));
    }

    #[test]
    fn test_empty_items_is_not_found() {
        let response: UpcItemDbResponse =
            serde_json::from_value(json!({ "code": "OK", "total": 0, "items": [] })).unwrap();
        assert!(response.into_record().is_none());
    }

    #[test]
    fn test_lookup_url() {
        let client = UpcItemDbClient::new(Client::new(), "https://upc.example");
        assert_eq!(
            client.lookup_url("885909950805"),
            "https://upc.example/prod/trial/lookup?upc=885909950805"
        );
    }
}
