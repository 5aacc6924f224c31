//! Main application entry point (native).

use statedeck_app::{AppConfig, GalleryApp, ShortcutRegistry};

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting StateDeck");

    let config = AppConfig::from_env();
    ShortcutRegistry::log_all(&config.gallery);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(GalleryApp::new(config.gallery)))),
    )
}
