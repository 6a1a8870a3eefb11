//! DirView — desktop file browser.
//!
//! Thin binary entry point. All logic lives in the `dirview-core`
//! and `dirview-gui` crates.

use dirview_core::config::ViewerConfig;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ViewerConfig::from_env()?;
    tracing::info!("DirView starting at {}", config.root_path.display());

    // Scan before opening the window so the first frame already has rows.
    let state = dirview_gui::BrowserState::new(&config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("File Explorer")
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DirView",
        options,
        Box::new(|cc| Ok(Box::new(dirview_gui::DirViewApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
