// ABOUTME: Route handler for product sustainability analysis from a name, description, photo, or barcode
// ABOUTME: Enriches the prompt with barcode database data when available before calling the AI service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `EcoScan` routes
//!
//! The image is decoded before anything else so a bad payload fails without
//! spending a barcode lookup or an AI call. Barcode provider failures never
//! reach the client; an unknown barcode just falls back to description and
//! image analysis.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::JsonBody;
use crate::errors::{AppError, ErrorCode};
use crate::llm::prompts::{product_eco_analysis, ProductAnalysisContext};
use crate::llm::{generate, ImageAttachment};
use crate::models::ProductSummary;
use crate::resources::ServerResources;

/// Request body for a product analysis; at least one field is required
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoScanRequest {
    /// Product name typed by the user
    #[serde(default)]
    pub product_name: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub product_description: Option<String>,
    /// Photo as a data URI or bare base64
    #[serde(default)]
    pub image: Option<String>,
    /// Scanned barcode
    #[serde(default)]
    pub barcode: Option<String>,
}

/// Response for a product analysis
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoScanResponse {
    /// Always `true`
    pub success: bool,
    /// Generated analysis, unprocessed
    pub analysis: String,
    /// Database record summary, `null` when no barcode resolved
    pub product_data: Option<ProductSummary>,
}

/// Treat blank strings the same as absent fields
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `EcoScan` routes handler
pub struct EcoScanRoutes;

impl EcoScanRoutes {
    /// Create all `EcoScan` routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ecoscan", post(Self::handle_scan))
            .with_state(resources)
    }

    /// Handle POST /api/ecoscan
    async fn handle_scan(
        State(resources): State<Arc<ServerResources>>,
        JsonBody(request): JsonBody<EcoScanRequest>,
    ) -> Result<Response, AppError> {
        let product_name = present(request.product_name.as_deref());
        let product_description = present(request.product_description.as_deref());
        let barcode = present(request.barcode.as_deref());
        let image = present(request.image.as_deref())
            .map(ImageAttachment::from_encoded)
            .transpose()?;

        if product_name.is_none()
            && product_description.is_none()
            && barcode.is_none()
            && image.is_none()
        {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "Provide a productName, productDescription, image, or barcode to analyze",
            ));
        }

        let resolution = match barcode {
            Some(code) => {
                info!(barcode = %code, "Looking up barcode");
                Some(resources.barcode_resolver.resolve(code).await)
            }
            None => None,
        };
        let product = resolution.as_ref().and_then(|r| r.record());

        let prompt = product_eco_analysis(ProductAnalysisContext {
            product_name,
            product_description,
            barcode,
            product,
            image,
        });
        let analysis = generate(resources.llm.as_ref(), prompt).await?;

        let response = EcoScanResponse {
            success: true,
            analysis,
            product_data: product.map(ProductSummary::from),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
