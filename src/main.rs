//! Registry GUI - Main Entry Point
//!
//! Native gallery for browsing the components of a UI component registry

use registry_gui::app::application::run_app;
use registry_gui::logging::{init_console_tracing, init_tracing};
use registry_gui::utils::config_store::{load_config, log_dir};

fn main() {
    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = match log_dir().map_err(anyhow::Error::from).and_then(|dir| init_tracing(&dir)) {
        Ok(guard) => Some(guard),
        Err(e) => {
            if let Err(console) = init_console_tracing() {
                eprintln!("Failed to initialize logging: {console:#}");
            }
            tracing::warn!("File logging disabled: {:#}", e);
            None
        }
    };

    tracing::info!("Starting Registry GUI...");

    let config = load_config();

    // Run the GPUI application
    run_app(config);
}
