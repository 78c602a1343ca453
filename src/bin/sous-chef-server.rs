// ABOUTME: Main server binary wiring configuration, logging, and the HTTP server
// ABOUTME: Loads env-based config, builds shared resources, and serves until terminated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous-Chef Contributors

//! # Sous-Chef Server Binary
//!
//! Starts the recipe suggestion API: ingredient recognition from photos
//! and recipe generation backed by a curated collection, web search, and
//! a generative model.

use anyhow::Result;
use clap::Parser;
use sous_chef::{config::environment::ServerConfig, logging, resources::ServerResources, server::RecipeServer};
use tracing::info;

#[derive(Parser)]
#[command(name = "sous-chef-server")]
#[command(about = "Sous-Chef - recipe suggestions from the ingredients you have")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Sous-Chef server");
    info!("{}", config.summary());

    let resources = ServerResources::shared(config);
    info!(
        recipes = resources.database.len(),
        "Recipe collection loaded"
    );

    RecipeServer::new(resources).run().await
}
