// ABOUTME: LLM provider abstraction layer for the generative AI service behind every advice route
// ABOUTME: Defines capabilities, message and request types, the provider trait, and prompt execution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Interface
//!
//! Routes never talk to the generative service directly. They build a
//! [`Prompt`] with the pure builders in [`prompts`] and hand it to
//! [`generate`], which checks provider capabilities, runs the completion, and
//! records a structured log line.
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: Bitflags describing provider features
//! - **`LlmProvider`**: Async trait for text completion and model listing
//! - **`ChatMessage`**: User message carrying text and optional inline images
//!
//! ## Example
//!
//! ```rust,no_run
//! use ecolens_server::llm::{generate, prompts, LlmProvider};
//!
//! async fn explain(provider: &dyn LlmProvider) {
//!     let prompt = prompts::climate_education("Why do oceans absorb CO2?");
//!     let answer = generate(provider, prompt).await;
//! }
//! ```

mod gemini;
/// Inline image attachments
pub mod image;
/// Prompt builders for every advisory task
pub mod prompts;

pub use gemini::GeminiProvider;
pub use image::ImageAttachment;
pub use prompts::{Prompt, PromptTask};

use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// LLM provider capability flags
    ///
    /// Checked before a request is sent so unsupported inputs fail fast.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider accepts inline image input
        const VISION = 0b0000_0001;
    }
}

impl LlmCapabilities {
    /// Capabilities of a text-only provider
    #[must_use]
    pub const fn text_only() -> Self {
        Self::empty()
    }

    /// Capabilities of a multimodal provider
    #[must_use]
    pub const fn multimodal() -> Self {
        Self::VISION
    }

    /// Check if vision is supported
    #[must_use]
    pub const fn supports_vision(&self) -> bool {
        self.contains(Self::VISION)
    }
}

// ============================================================================
// Message Types
// ============================================================================

/// A single user message sent to the provider
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Text content
    pub content: String,
    /// Inline images attached after the text
    pub images: Vec<ImageAttachment>,
}

impl ChatMessage {
    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            images: Vec::new(),
        }
    }

    /// Attach an inline image
    #[must_use]
    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.images.push(image);
        self
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a completion request
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier; provider default when absent
    pub model: Option<String>,
}

impl ChatRequest {
    /// Create a new request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Whether any message carries an image
    #[must_use]
    pub fn has_images(&self) -> bool {
        self.messages.iter().any(|m| !m.images.is_empty())
    }
}

/// Response from a completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text, passed through unprocessed
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Finish reason reported by the provider
    pub finish_reason: Option<String>,
}

/// Entry of the provider's model catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Fully qualified model name, e.g. `models/gemini-1.5-flash`
    pub name: String,
    /// Human-readable name
    pub display_name: String,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> LlmCapabilities;

    /// Perform a completion
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse>;

    /// List the models the provider offers
    async fn list_models(&self) -> AppResult<Vec<ModelInfo>>;
}

/// Run a prompt against a provider and return the generated text
///
/// # Errors
///
/// Returns `InvalidInput` if the prompt carries an image and the provider has
/// no vision support, or the provider's error if the completion fails.
pub async fn generate(provider: &dyn LlmProvider, prompt: Prompt) -> AppResult<String> {
    let task = prompt.task;
    let request = prompt.into_request();
    let with_image = request.has_images();

    if with_image && !provider.capabilities().supports_vision() {
        return Err(AppError::invalid_input(format!(
            "{} does not support image analysis",
            provider.display_name()
        )));
    }

    let started = Instant::now();
    let response = provider.complete(&request).await?;
    AppLogger::log_ai_generation(
        provider.name(),
        task.as_str(),
        &response.model,
        with_image,
        started.elapsed().as_millis() as u64,
    );

    Ok(response.content)
}
