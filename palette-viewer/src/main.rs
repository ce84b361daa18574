//! Palette Viewer - desktop gradient palette picker.

mod app;
mod canvas;
mod gradient;
mod surface;
mod theme;

use app::PickerApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Optional share URL (or query) to start from, then an optional stylesheet
    let mut args = std::env::args().skip(1);
    let initial_location: Option<String> = args.next();
    let stylesheet: Option<PathBuf> = args.next().map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Palette Picker"),
        vsync: false,
        ..Default::default()
    };

    eframe::run_native(
        "Palette Picker",
        options,
        Box::new(move |cc| Ok(Box::new(PickerApp::new(cc, initial_location, stylesheet)))),
    )
}
