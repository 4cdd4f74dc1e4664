//! regionview: pin live mirrors of screen regions in floating windows.

mod ui;

use eframe::egui;
use regionview::model::constants::{MAIN_WINDOW_SIZE, MAIN_WINDOW_TITLE};
use regionview::storage;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = storage::load_settings();
    log::info!(
        "Starting regionview (refresh every {} ms, placement {:?})",
        settings.update_interval_ms,
        settings.placement
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(MAIN_WINDOW_TITLE)
            .with_inner_size([MAIN_WINDOW_SIZE.0, MAIN_WINDOW_SIZE.1])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        MAIN_WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(ui::ScreenCaptureApp::new(settings)))),
    )
}
