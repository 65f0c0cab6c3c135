//! FIFA World Cup Dashboard
//!
//! Serves a single page showing World Cup wins by country on a map, with
//! selectors for looking up a country's wins or a year's final.

mod callbacks;
mod config;
mod error;
mod figure;
mod page;
mod server;
mod types;

use crate::config::Config;
use crate::error::Result;
use crate::server::{start_server, ServerState, SharedState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("worldcup_dashboard=info".parse()?);

    // Use JSON format for Cloud Logging when LOG_FORMAT=json
    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting FIFA World Cup Dashboard...");
    info!("Address: {}", config.addr());

    let state: SharedState = Arc::new(ServerState::new()?);
    info!(
        finals = worldcup_finals::finals().len(),
        countries = worldcup_finals::win_counts().len(),
        "Loaded World Cup finals"
    );

    for callback in state.callbacks.callbacks() {
        info!(
            input = callback.input,
            output = callback.output,
            "Registered callback"
        );
    }

    // Start HTTP server (blocking until shutdown)
    start_server(state, config.addr()).await?;

    Ok(())
}
