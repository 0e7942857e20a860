use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod app;
mod boundary;
mod config;
mod logging;
mod routing;
mod session;
mod ui;

use app::{PersistedStudioSettings, StudioApp, SETTINGS_STORAGE_KEY};

#[derive(Parser, Debug)]
#[command(
    name = "studio_gui",
    about = "Session-local workspace for browsing patterns and their outputs"
)]
struct Args {
    /// Override the studio config directory.
    #[arg(long)]
    config_dir: Option<PathBuf>,
    /// Override the patterns directory.
    #[arg(long)]
    patterns_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let paths = config::resolve_paths(args.config_dir, args.patterns_dir)?;
    logging::init(&paths.log_dir)?;
    tracing::info!(config_dir = %paths.config_dir.display(), "starting Pattern Studio");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pattern Studio")
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([900.0, 620.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pattern Studio",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedStudioSettings>(&text).ok())
            });
            Ok(Box::new(StudioApp::new(paths, persisted)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("ui shell exited with an error: {err}"))
}
