use anyhow::anyhow;
use artboard::app::PaintApp;
use artboard::toolbar::{WINDOW_HEIGHT, WINDOW_WIDTH};
use artboard::{logging, settings};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    let (settings, load_error) = match settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (settings::Settings::default(), Some(err)),
    };
    logging::init(settings.debug_logging);
    if let Some(err) = load_error {
        tracing::warn!(?err, "settings file unreadable, using defaults");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Artboard",
        native_options,
        Box::new(move |_cc| Box::new(PaintApp::new(settings))),
    )
    .map_err(|err| anyhow!("failed to run the artboard window: {err}"))
}
