mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::anyhow;
use app::LaunchboardApp;
use data::loader;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Load the dataset before any window opens; a data-source failure is
    // fatal at startup. An optional positional argument points at a local
    // CSV (e.g. one written by `generate_sample`) instead of the endpoint.
    let result = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            log::info!("loading launch records from {}", path.display());
            loader::load_file(&path)
        }
        None => {
            log::info!("fetching launch records from {}", loader::DATA_URL);
            loader::load_url(loader::DATA_URL)
        }
    };

    let dataset = match result {
        Ok(dataset) => dataset,
        Err(e) => {
            let e = anyhow::Error::new(e);
            log::error!("failed to load launch dataset: {e:#}");
            return Err(e);
        }
    };

    log::info!(
        "loaded {} launch records across {} sites",
        dataset.len(),
        dataset.sites.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchboardApp::new(dataset)))),
    )
    .map_err(|e| anyhow!("eframe: {e}"))
}
