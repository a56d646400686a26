//! Hobby Form - Main Entry Point
//!
//! Profile form with validated fields and a dynamic hobby list

use hobby_form::app::application::run_app;
use hobby_form::constants::CONFIG_FILE;
use hobby_form::domain::config::AppConfig;
use hobby_form::utils::config_store::load_config;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Hobby Form...");

    let (config, loaded) = match load_config::<AppConfig>(CONFIG_FILE) {
        Ok(Some(config)) => (config, true),
        Ok(None) => (AppConfig::default(), false),
        Err(e) => {
            tracing::warn!("Failed to load {}: {}; using defaults", CONFIG_FILE, e);
            (AppConfig::default(), false)
        }
    };

    // Run the GPUI application
    run_app(config, loaded);
}
