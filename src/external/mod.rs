// ABOUTME: External product database clients for barcode lookups
// ABOUTME: Defines the lookup contract, provider clients, and the ordered fallback resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # External Product Databases
//!
//! Barcodes are resolved against two public databases in order:
//!
//! 1. [`OpenFoodFactsClient`] for food and beverages
//! 2. [`UpcItemDbClient`] for general merchandise
//!
//! Each client maps its own response schema into the shared
//! [`ProductRecord`](crate::models::ProductRecord). The [`BarcodeResolver`]
//! walks the providers sequentially and absorbs every provider failure into a
//! not-found outcome.

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::ProductRecord;

/// Ordered fallback across lookup providers
pub mod barcode_resolver;
/// Open Food Facts client
pub mod open_food_facts;
/// UPC Item DB client
pub mod upc_item_db;

pub use barcode_resolver::{BarcodeResolution, BarcodeResolver};
pub use open_food_facts::OpenFoodFactsClient;
pub use upc_item_db::UpcItemDbClient;

/// Placeholder values used when a provider omits a field
pub mod placeholders {
    /// Missing product name
    pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
    /// Missing brand
    pub const UNKNOWN_BRAND: &str = "Unknown Brand";
    /// Missing category or grade
    pub const NOT_APPLICABLE: &str = "N/A";
    /// Missing ingredient list or description
    pub const NOT_AVAILABLE: &str = "Not available";
    /// Missing packaging
    pub const NOT_SPECIFIED: &str = "Not specified";
}

/// A product database that can be queried by barcode
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Display name of the database, used in logs
    fn name(&self) -> &'static str;

    /// Look up a barcode
    ///
    /// `Ok(None)` means the database answered and does not know the product.
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the database cannot be reached
    /// or answers with something unusable.
    async fn lookup(&self, barcode: &str) -> AppResult<Option<ProductRecord>>;
}

/// Treat blank strings from providers as absent
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Provider value or a fixed placeholder
pub(crate) fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    non_empty(value).unwrap_or_else(|| placeholder.to_owned())
}
