// ABOUTME: Normalized product record produced by the barcode lookup providers
// ABOUTME: Provider-specific fields are optional; placeholders never leak nulls into prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product database that produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductSource {
    /// Open Food Facts (food and beverages)
    #[serde(rename = "Open Food Facts")]
    OpenFoodFacts,
    /// UPC Item DB (general merchandise)
    #[serde(rename = "UPC Item DB")]
    UpcItemDb,
}

impl ProductSource {
    /// Display name, as shown to users and in prompts
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenFoodFacts => "Open Food Facts",
            Self::UpcItemDb => "UPC Item DB",
        }
    }
}

impl fmt::Display for ProductSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product found in one of the barcode databases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Database that answered
    pub source: ProductSource,
    /// Product name or placeholder
    pub name: String,
    /// Brand or placeholder
    pub brand: String,
    /// Category list or placeholder
    pub categories: String,
    /// Ingredient list (Open Food Facts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    /// Packaging description (Open Food Facts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
    /// Quality or origin labels (Open Food Facts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    /// Nutri-Score grade (Open Food Facts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutriscore: Option<String>,
    /// Eco-Score grade (Open Food Facts only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecoscore: Option<String>,
    /// Free-text description (UPC Item DB only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Product image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Subset of a product record returned to the client alongside an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Product name
    pub name: String,
    /// Brand
    pub brand: String,
    /// Database that answered
    pub source: ProductSource,
    /// Product image, `null` when the provider had none
    pub image_url: Option<String>,
}

impl From<&ProductRecord> for ProductSummary {
    fn from(record: &ProductRecord) -> Self {
        Self {
            name: record.name.clone(),
            brand: record.brand.clone(),
            source: record.source,
            image_url: record.image_url.clone(),
        }
    }
}
