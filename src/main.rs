use anyhow::Result;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use perf_catalog::config::CatalogConfig;
use perf_catalog::ui_dioxus::App;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = CatalogConfig::load()?;
    tracing::info!(data_root = %config.data_root, "Starting catalog");

    let window = WindowBuilder::new().with_title(config.window_title.clone());

    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(App);

    Ok(())
}
