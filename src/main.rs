//! # Styling Demo
//!
//! Starts the [`StylingSystem`], drives each inbound operation once, then shuts down.
//!
//! Configuration is read from the TOML file named by `STYLING_CONFIG` (optional) and from
//! `STYLING__*` environment variables.

use beachshirts_styling::lifecycle::{setup_tracing, StylingConfig, StylingSystem};
use std::path::PathBuf;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config_path = std::env::var_os("STYLING_CONFIG").map(PathBuf::from);
    let config = StylingConfig::load(config_path.as_deref()).map_err(|e| e.to_string())?;
    info!(?config, "Starting styling system");

    let system = StylingSystem::new(&config);
    let orchestrator = system.orchestrator.clone();

    let styles = orchestrator.list_styles().await.map_err(|e| e.to_string())?;
    for style in &styles {
        info!(name = %style.name, image_url = %style.image_url, "Style");
    }

    // One order on each side of the gift wrap threshold
    for quantity in [12, 40] {
        let span = tracing::info_span!("order", quantity);
        let result = orchestrator
            .make_shirts("style1", quantity)
            .instrument(span)
            .await;
        match result {
            Ok(packed) => info!(shirts = packed.len(), "Order packed"),
            Err(e) => error!(error = %e, "Order failed"),
        }
    }

    if let Err(e) = orchestrator.add_style("style3").await {
        error!(error = %e, "Adding style failed");
    }
    if let Err(e) = orchestrator.restock_style("style1").await {
        error!(error = %e, "Restocking failed");
    }

    drop(orchestrator);
    system.shutdown().await.map_err(|e| e.to_string())?;
    Ok(())
}
