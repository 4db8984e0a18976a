// ABOUTME: Product eco-analysis prompt with optional verified database data and product photo
// ABOUTME: Requests ten fixed sections covering score, footprint, materials, disposal, and alternatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{render, Prompt, PromptTask};
use crate::llm::ImageAttachment;
use crate::models::ProductRecord;

const TEMPLATE: &str = include_str!("product_analysis.md");

/// Product line when neither a name nor a database record is available
const IMAGE_ONLY_PRODUCT: &str = "Unknown Product (analyzing from image)";

/// Appended when the image supplements a known product
const IMAGE_SUPPLEMENT: &str =
    "\n\nAlso analyze the product from this image to provide more accurate assessment.";

/// Prefixed when the image is the only description of the product
const IMAGE_PRIMARY: &str = "Analyze the product in this image for eco-friendliness. ";

/// Everything known about the product being analyzed
#[derive(Debug, Clone, Default)]
pub struct ProductAnalysisContext<'a> {
    /// Name typed by the user
    pub product_name: Option<&'a str>,
    /// Free-text description typed by the user
    pub product_description: Option<&'a str>,
    /// Scanned barcode
    pub barcode: Option<&'a str>,
    /// Record resolved from the barcode
    pub product: Option<&'a ProductRecord>,
    /// Product photo
    pub image: Option<ImageAttachment>,
}

/// Render the verified data block from the fields the record actually has
fn verified_product_block(record: &ProductRecord) -> String {
    let mut block = format!(
        "VERIFIED PRODUCT DATA from {}:\nProduct Name: {}\nBrand: {}\nCategories: {}\n",
        record.source, record.name, record.brand, record.categories
    );

    let optional = [
        ("Ingredients", record.ingredients.as_deref()),
        ("Packaging", record.packaging.as_deref()),
        ("Labels", record.labels.as_deref()),
        ("Nutri-Score", record.nutriscore.as_deref()),
        ("Eco-Score", record.ecoscore.as_deref()),
        ("Description", record.description.as_deref()),
    ];
    for (label, value) in optional {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            block.push_str(&format!("{label}: {value}\n"));
        }
    }

    block
}

/// Build the product eco-analysis prompt
#[must_use]
pub fn product_eco_analysis(context: ProductAnalysisContext<'_>) -> Prompt {
    let product_name = context
        .product_name
        .map(str::trim)
        .filter(|name| !name.is_empty());

    let product_info = match (context.product, context.barcode) {
        (Some(record), _) => format!("{}\n", verified_product_block(record)),
        (None, Some(barcode)) => format!(
            "Barcode: {barcode} (not found in product databases, analyzing from description/image)\n\n"
        ),
        (None, None) => String::new(),
    };

    let product_line = product_name
        .or_else(|| context.product.map(|record| record.name.as_str()))
        .unwrap_or(IMAGE_ONLY_PRODUCT);

    let description = context
        .product_description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| format!("Additional Description: {d}\n"))
        .unwrap_or_default();

    let score_basis = if context.product.is_some() {
        "verified product data"
    } else {
        "general product category"
    };

    let text = render(
        TEMPLATE,
        &[
            ("product_info", product_info.as_str()),
            ("product", product_line),
            ("description", description.as_str()),
            ("score_basis", score_basis),
        ],
    );

    match context.image {
        Some(image) => {
            let text = if product_name.is_some() || context.product.is_some() {
                format!("{text}{IMAGE_SUPPLEMENT}")
            } else {
                format!("{IMAGE_PRIMARY}{text}")
            };
            Prompt {
                task: PromptTask::ProductEcoAnalysis,
                text,
                image: Some(image),
            }
        }
        None => Prompt::text(PromptTask::ProductEcoAnalysis, text),
    }
}
