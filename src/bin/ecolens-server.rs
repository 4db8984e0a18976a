// ABOUTME: Server binary for the EcoLens sustainability API
// ABOUTME: Loads environment configuration, initializes logging, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `EcoLens` API Server Binary
//!
//! Starts the HTTP API with the configuration read from the environment.
//! `GEMINI_API_KEY` is required; everything else has a default.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ecolens_server::{
    config::ServerConfig, logging, resources::ServerResources, server::EcoLensServer,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ecolens-server")]
#[command(about = "EcoLens+ API - carbon footprint estimation and AI sustainability advice")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    config.validate()?;

    info!("Starting EcoLens+ API");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config));
    info!(
        providers = ?resources.barcode_resolver.provider_names(),
        "Barcode lookup chain ready"
    );

    if let Err(e) = EcoLensServer::new(resources).run().await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
