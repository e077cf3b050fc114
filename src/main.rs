mod app;
mod artifacts;
mod content;
mod data;
mod download;
mod feedback;
mod page;
mod state;
mod ui;
mod views;

use anyhow::{Context, Result};
use app::DashboardApp;
use artifacts::AssetLayout;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let root = std::env::current_dir().context("resolving working directory")?;
    let layout = AssetLayout::from_root(root);
    log::info!("Reading artifacts from {}", layout.root().display());

    // Every view assumes the dataset is there; refuse to start without it.
    let dataset = data::loader::load_dataset(&layout.dataset_path())
        .inspect_err(|e| log::error!("{e}"))
        .context("cannot start without the cleaned dataset")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(content::WINDOW_TITLE)
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0])
            .with_icon(std::sync::Arc::new(ui::panels::window_icon())),
        ..Default::default()
    };

    eframe::run_native(
        content::WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render file:// png charts.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new(dataset, layout)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
