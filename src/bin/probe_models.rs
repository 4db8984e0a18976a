// ABOUTME: Diagnostic binary that checks which Gemini models accept requests with the configured key
// ABOUTME: Sends a one-word prompt to each candidate model and reports which ones answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Model Probe
//!
//! ```bash
//! GEMINI_API_KEY=... ecolens-probe-models
//! GEMINI_API_KEY=... ecolens-probe-models --model gemini-2.5-flash --model gemini-1.5-flash
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use ecolens_server::{
    config::GeminiConfig,
    constants::{env_vars, probe},
    llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider},
};

#[derive(Parser)]
#[command(name = "ecolens-probe-models")]
#[command(about = "Check which Gemini models work with the configured API key")]
pub struct Args {
    /// Model to test; repeat to test several (defaults to the built-in candidate list)
    #[arg(long = "model")]
    models: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let api_key = std::env::var(env_vars::GEMINI_API_KEY)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .with_context(|| format!("{} environment variable not set", env_vars::GEMINI_API_KEY))?;

    let models = if args.models.is_empty() {
        probe::CANDIDATE_MODELS
            .iter()
            .map(|model| (*model).to_owned())
            .collect()
    } else {
        args.models
    };

    let provider = GeminiProvider::new(&GeminiConfig::with_api_key(api_key));
    let mut working = Vec::new();

    for model in &models {
        println!("Testing model: {model}");
        let request =
            ChatRequest::new(vec![ChatMessage::user(probe::TEST_PROMPT)]).with_model(model.clone());

        match provider.complete(&request).await {
            Ok(_) => {
                println!("  ✅ {model} works");
                working.push(model.as_str());
            }
            Err(e) => println!("  ❌ {model} failed: {}", e.message),
        }
    }

    if working.is_empty() {
        bail!("None of the {} tested models responded", models.len());
    }

    println!("\nWorking models: {}", working.join(", "));
    Ok(())
}
